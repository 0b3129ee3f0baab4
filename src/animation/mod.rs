/// Timed and pushed progress.
pub mod driver;
/// Easing curves.
pub mod ease;
