use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn linear_drive_interpolates_and_finishes_at_one() {
    let mut d = ProgressDriver::new();
    d.start(ms(1_000), ms(2_000), Ease::Linear).unwrap();
    assert!(d.is_running());
    assert_eq!(d.tick(ms(1_000)), Some(0.0));
    assert_eq!(d.tick(ms(1_500)), Some(0.25));
    assert_eq!(d.tick(ms(2_000)), Some(0.5));
    assert_eq!(d.tick(ms(3_000)), Some(1.0));
    assert!(!d.is_running());
    assert_eq!(d.tick(ms(3_100)), None);
    assert_eq!(d.progress(), 1.0);
}

#[test]
fn restart_cancels_previous_drive() {
    let mut d = ProgressDriver::new();
    let first = d.start(ms(0), ms(1_000), Ease::Linear).unwrap();
    assert_eq!(d.tick(ms(600)), Some(0.6));

    let second = d.start(ms(600), ms(1_000), Ease::Linear).unwrap();
    assert_ne!(first, second);
    assert_eq!(d.progress(), 0.0);
    assert_eq!(d.tick_drive(first, ms(700)), None);
    assert_eq!(d.tick_drive(second, ms(700)), Some(0.1));
}

#[test]
fn cancel_keeps_last_progress() {
    let mut d = ProgressDriver::new();
    let id = d.start(ms(0), ms(1_000), Ease::Linear).unwrap();
    d.tick(ms(300));
    assert_eq!(d.cancel(), Some(id));
    assert_eq!(d.cancel(), None);
    assert_eq!(d.tick(ms(900)), None);
    assert_eq!(d.progress(), 0.3);
}

#[test]
fn pushed_values_cancel_and_saturate() {
    let mut d = ProgressDriver::new();
    d.start(ms(0), ms(1_000), Ease::Linear).unwrap();
    assert_eq!(d.set_progress(0.42), 0.42);
    assert!(!d.is_running());
    assert_eq!(d.set_progress(1.7), 1.0);
    assert_eq!(d.set_progress(-0.1), 0.0);
    assert_eq!(d.set_progress(f64::NAN), 0.0);
}

#[test]
fn ticks_never_move_backwards_within_a_drive() {
    let mut d = ProgressDriver::new();
    d.start(ms(0), ms(1_000), Ease::OutQuad).unwrap();
    let a = d.tick(ms(500)).unwrap();
    let b = d.tick(ms(200)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_duration_is_rejected() {
    let mut d = ProgressDriver::new();
    assert!(d.start(ms(0), Duration::ZERO, Ease::Linear).is_err());
    let fps = Fps::new(30, 1).unwrap();
    assert!(ProgressDriver::frames(Duration::ZERO, fps, Ease::Linear).is_err());
}

#[test]
fn offline_frames_span_zero_to_one() {
    let fps = Fps::new(10, 1).unwrap();
    let frames: Vec<_> = ProgressDriver::frames(ms(1_000), fps, Ease::Linear)
        .unwrap()
        .collect();
    assert_eq!(frames.len(), 11);
    assert_eq!(frames[0], (FrameIndex(0), 0.0));
    assert!((frames[5].1 - 0.5).abs() < 1e-12);
    assert_eq!(frames[10], (FrameIndex(10), 1.0));
    assert!(frames.windows(2).all(|w| w[1].1 >= w[0].1));
}

#[test]
fn offline_frames_end_exactly_at_one_for_uneven_durations() {
    let fps = Fps::new(30, 1).unwrap();
    let iter = ProgressDriver::frames(ms(50), fps, Ease::InOutQuad).unwrap();
    assert_eq!(iter.len(), 3);
    let last = iter.last().unwrap();
    assert_eq!(last, (FrameIndex(2), 1.0));
}

#[test]
fn slider_positions_map_to_progress() {
    assert_eq!(progress_from_slider(0, 100).unwrap(), 0.0);
    assert_eq!(progress_from_slider(37, 100).unwrap(), 0.37);
    assert_eq!(progress_from_slider(150, 100).unwrap(), 1.0);
    assert!(progress_from_slider(1, 0).is_err());
    assert_eq!(format_progress(0.0), "0.00");
    assert_eq!(format_progress(0.376), "0.38");
}
