use super::*;
use crate::foundation::core::Rect;

struct FixedLines {
    widths: Vec<f64>,
    height: f64,
}

impl LineMetricsSource for FixedLines {
    fn line_count(&self) -> usize {
        self.widths.len()
    }

    fn line_width(&self, index: usize) -> f64 {
        self.widths[index]
    }

    fn block_height(&self) -> f64 {
        self.height
    }
}

#[test]
fn line_height_is_block_height_over_line_count() {
    let src = FixedLines {
        widths: vec![100.0, 50.0, 80.0],
        height: 61.5,
    };
    let m = LineMetrics::from_source(&src).unwrap();
    assert_eq!(m.line_count(), 3);
    assert_eq!(m.line_height(), 20.5);
    assert_eq!(m.total_width(), 230.0);
    assert_eq!(m.line_widths(), &[100.0, 50.0, 80.0]);
}

#[test]
fn zero_lines_is_invalid_input() {
    let src = FixedLines {
        widths: vec![],
        height: 0.0,
    };
    assert!(
        LineMetrics::from_source(&src)
            .unwrap_err()
            .is_invalid_input()
    );
    assert!(LineMetrics::new(vec![], 10.0).unwrap_err().is_invalid_input());
}

#[test]
fn bad_geometry_is_invalid_input() {
    assert!(LineMetrics::new(vec![10.0, -2.0], 10.0).is_err());
    assert!(LineMetrics::new(vec![10.0, f64::INFINITY], 10.0).is_err());
    assert!(LineMetrics::new(vec![10.0], 0.0).is_err());
    let flat = FixedLines {
        widths: vec![10.0],
        height: 0.0,
    };
    assert!(LineMetrics::from_source(&flat).is_err());
}

#[test]
fn clip_region_uses_uniform_height() {
    let m = LineMetrics::new(vec![100.0, 50.0, 80.0], 20.0).unwrap();
    let region = m.clip_region(0.5).unwrap();
    assert_eq!(region.len(), 2);
    assert_eq!(region.rects()[1], Rect::new(0.0, 20.0, 15.0, 40.0));
}
