use super::*;
use crate::sweep::metrics::LineMetrics;

fn test_font() -> Option<Vec<u8>> {
    if let Some(path) = std::env::var_os("LYRICSWEEP_TEST_FONT") {
        let bytes = std::fs::read(&path).unwrap_or_else(|e| {
            panic!("LYRICSWEEP_TEST_FONT '{}' unreadable: {e}", path.to_string_lossy())
        });
        return Some(bytes);
    }
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .into_iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[test]
fn cjk_detection_uses_unified_ideograph_range() {
    assert!(contains_cjk("我爱你"));
    assert!(contains_cjk("lyrics 中 mixed"));
    assert!(contains_cjk("\u{9FA5}"));
    assert!(!contains_cjk("\u{9FA6}"));
    assert!(!contains_cjk("plain ascii"));
    assert!(!contains_cjk("こんにちは"));
    assert!(!contains_cjk(""));
}

#[test]
fn cjk_text_switches_line_spacing() {
    let style = SweepStyle {
        line_spacing: 1.5,
        ..SweepStyle::default()
    };
    assert_eq!(line_spacing_for("hello", &style), 1.5);
    assert_eq!(line_spacing_for("你好", &style), 1.23);
}

#[test]
fn garbage_font_bytes_are_a_layout_error() {
    let err = TextLayoutEngine::from_font_bytes(b"not a font".to_vec())
        .err()
        .expect("garbage should not register");
    assert!(matches!(err, SweepError::Layout(_)));
}

#[test]
fn wrapped_block_reports_several_lines() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let mut engine = TextLayoutEngine::from_font_bytes(font).unwrap();
    assert!(!engine.family_name().trim().is_empty());

    let style = SweepStyle::default().with_font_size(20.0);
    let text = "the quick brown fox jumps over the lazy dog again and again";
    let block = engine.layout_block(text, &style, Some(160.0)).unwrap();
    let metrics = LineMetrics::from_source(&block).unwrap();

    assert!(metrics.line_count() > 1);
    assert!(metrics.line_widths().iter().all(|w| *w > 0.0 && *w <= 160.5));
    let expected = f64::from(block.height()) / metrics.line_count() as f64;
    assert!((metrics.line_height() - expected).abs() < 1e-6);
}

#[test]
fn larger_spacing_makes_taller_blocks() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let mut engine = TextLayoutEngine::from_font_bytes(font).unwrap();
    let tight = SweepStyle::default();
    let loose = SweepStyle {
        line_spacing: 2.0,
        ..SweepStyle::default()
    };
    let a = engine.layout_block("one two three", &tight, None).unwrap();
    let b = engine.layout_block("one two three", &loose, None).unwrap();
    assert!(b.height() > a.height());
}

#[test]
fn invalid_wrap_width_is_rejected() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no test font available");
        return;
    };
    let mut engine = TextLayoutEngine::from_font_bytes(font).unwrap();
    let style = SweepStyle::default();
    assert!(engine.layout_block("x", &style, Some(0.0)).is_err());
    assert!(engine.layout_block("x", &style, Some(f32::NAN)).is_err());
}
