use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30000, 1001).unwrap().as_f64(), 30000.0 / 1001.0);
}

#[test]
fn frames_covering_rounds_up() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_covering(1.0), 30);
    assert_eq!(fps.frames_covering(0.01), 1);
    assert_eq!(fps.frames_covering(0.0), 0);
    assert_eq!(fps.frames_covering(f64::NAN), 0);
}

#[test]
fn canvas_bounds_follow_rasterizer_limits() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(640, 120).unwrap();
    assert_eq!(c.as_u16().unwrap(), (640, 120));
}

#[test]
fn color_parses_rgb_and_argb() {
    assert_eq!(Rgba8::parse_hex("#FF0000").unwrap(), Rgba8::RED);
    assert_eq!(Rgba8::parse_hex("ffffffff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("#80102030").unwrap(),
        Rgba8 {
            r: 0x10,
            g: 0x20,
            b: 0x30,
            a: 0x80
        }
    );
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#GG0000").is_err());
}

#[test]
fn color_json_uses_argb_hex() {
    let json = serde_json::to_string(&Rgba8::RED).unwrap();
    assert_eq!(json, "\"#FFFF0000\"");
    let back: Rgba8 = serde_json::from_str("\"#00FF00\"").unwrap();
    assert_eq!(back, Rgba8::opaque(0, 255, 0));
}

#[test]
fn premultiply_scales_by_alpha() {
    let half = Rgba8 {
        r: 255,
        g: 128,
        b: 0,
        a: 128,
    };
    assert_eq!(half.premultiplied(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::TRANSPARENT.premultiplied(), [0, 0, 0, 0]);
}
