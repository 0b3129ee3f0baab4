use super::*;

const ALL: [Ease; 6] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::OutCubic,
    Ease::Smooth,
];

#[test]
fn every_curve_pins_the_endpoints() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn every_curve_is_monotonic() {
    for e in ALL {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = e.apply(f64::from(i) / 100.0);
            assert!(v + 1e-12 >= prev, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_of_range_input_saturates() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), 0.0);
        assert!((e.apply(7.0) - 1.0).abs() < 1e-12);
        assert_eq!(e.apply(f64::NAN), 0.0);
    }
}

#[test]
fn linear_is_the_default_and_identity() {
    assert_eq!(Ease::default(), Ease::Linear);
    assert_eq!(Ease::Linear.apply(0.37), 0.37);
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
}

#[test]
fn serde_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutQuad).unwrap(),
        "\"in_out_quad\""
    );
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
