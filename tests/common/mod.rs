use std::path::PathBuf;

/// A system font to lay out with, or `None` when the machine has none we know about.
///
/// `LYRICSWEEP_TEST_FONT`, when set, must point at a readable file.
pub fn test_font_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("LYRICSWEEP_TEST_FONT").map(PathBuf::from) {
        assert!(
            path.is_file(),
            "LYRICSWEEP_TEST_FONT points at '{}', which is not a readable file",
            path.display()
        );
        return Some(path);
    }
    [
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
    ]
    .into_iter()
    .find(|p| p.is_file())
}
