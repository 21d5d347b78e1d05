use color_convert_native::{convert, Color, ColorError, Hex, Oklch, Rgba, TargetFormat};

fn within_one(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 1
}

#[test]
fn hex_format_parse_roundtrip() {
    for v in 0..=255u8 {
        for hex in [
            Hex::new(v, 0, 0, 255),
            Hex::new(0, v, 0, 255),
            Hex::new(0, 0, v, 255),
            Hex::new(v, 255 - v, v / 2, v),
        ] {
            assert_eq!(Hex::parse(&hex.to_string()), Ok(hex), "{hex}");
        }
    }
}

#[test]
fn rgb_through_oklch_roundtrip_within_one() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let original = Hex::new(r, g, b, 255);
                let back = original.to_rgba().to_oklch().to_rgba().to_hex();
                assert!(
                    within_one(back.red, r) && within_one(back.green, g) && within_one(back.blue, b),
                    "{original} came back as {back}"
                );
                assert_eq!(back.alpha, 255);
            }
        }
    }
}

#[test]
fn rgb_text_through_oklch_text() {
    for input in ["rgb(255 0 0)", "rgb(0 255 0)", "rgb(0 0 255)", "rgb(128 128 128)", "rgb(30 41 59)"] {
        let original = Rgba::parse(input).unwrap().to_hex();
        let oklch_text = convert(input, TargetFormat::Oklch).unwrap();
        let back = Oklch::parse(&oklch_text).unwrap().to_hex();
        assert!(
            within_one(back.red, original.red)
                && within_one(back.green, original.green)
                && within_one(back.blue, original.blue),
            "{input} -> {oklch_text} -> {back}"
        );
    }
}

#[test]
fn canonical_red() {
    let lch = Hex::parse("#ff0000").unwrap().to_oklch();
    assert!((lch.lightness - 0.628).abs() < 1e-3, "{lch:?}");
    assert!((lch.chroma - 0.258).abs() < 1e-3, "{lch:?}");
    assert!((lch.hue - 29.2).abs() < 0.1, "{lch:?}");

    let back = lch.to_hex();
    assert!(within_one(back.red, 255) && within_one(back.green, 0) && within_one(back.blue, 0));
}

#[test]
fn black_has_no_hue() {
    let lch = Rgba::parse("rgb(0 0 0)").unwrap().to_oklch();
    assert_eq!(lch.lightness, 0.0);
    assert_eq!(lch.chroma, 0.0);
    assert_eq!(lch.alpha, 1.0);
    assert!(lch.to_string().contains(" none)"), "{lch}");
}

#[test]
fn omitted_alpha_is_opaque_everywhere() {
    assert_eq!(Rgba::parse("rgb(10 20 30)").unwrap().alpha, 1.0);
    assert_eq!(Oklch::parse("oklch(50% 0.1 30)").unwrap().alpha, 1.0);
    assert_eq!(Hex::parse("#ffffff").unwrap().alpha, 255);
}

#[test]
fn short_hex_matches_long_hex() {
    assert_eq!(Hex::parse("#abc"), Hex::parse("#aabbcc"));
    assert_eq!(Hex::parse("#abc").unwrap().alpha, 255);
}

#[test]
fn hue_is_taken_modulo_360() {
    let a = Oklch::parse("oklch(50% 0.1 720)").unwrap();
    let b = Oklch::parse("oklch(50% 0.1 0)").unwrap();
    assert_eq!(a.hue, b.hue);
}

#[test]
fn domain_rejections() {
    let cases: [(&str, bool); 5] = [
        ("oklch(50% -0.1 30)", true),
        ("rgb(0 0 0 / 150%)", true),
        ("oklch(1.5 0.1 30)", true),
        ("#12345", false),
        ("rgb(1 2)", false),
    ];
    for (input, range) in cases {
        let err = Color::parse(input).unwrap_err();
        assert_eq!(err.is_out_of_range(), range, "{input}: {err}");
        if !range {
            assert!(matches!(err, ColorError::Grammar { .. }), "{input}: {err}");
        }
    }
}

#[test]
fn errors_quote_the_offending_text() {
    let err = Color::parse("oklch(50% -0.1 30)").unwrap_err();
    assert!(err.to_string().contains("`-0.1`"), "{err}");
    let err = Color::parse("#12345").unwrap_err();
    assert!(err.to_string().contains("`#12345`"), "{err}");
}

#[test]
fn integer_rgb_matches_csscolorparser() {
    for input in ["rgb(255 0 128)", "rgb(12, 34, 56)", "rgb(0 0 0)", "rgb(255, 255, 255)", "rgb(1 2 3)"] {
        let ours = Rgba::parse(input).unwrap().to_hex();
        let reference = input.parse::<csscolorparser::Color>().unwrap().to_rgba8();
        assert_eq!([ours.red, ours.green, ours.blue], reference[..3], "{input}");
    }
}

#[test]
fn hex_matches_csscolorparser() {
    for input in ["#abc", "#abcd", "#1e293b", "#ff000080", "#FFFFFF"] {
        let ours = Hex::parse(input).unwrap();
        let reference = input.parse::<csscolorparser::Color>().unwrap().to_rgba8();
        assert_eq!([ours.red, ours.green, ours.blue, ours.alpha], reference, "{input}");
    }
}

#[test]
fn oklch_agrees_with_csscolorparser_when_supported() {
    for input in ["oklch(62.8% 0.2577 29.23)", "oklch(63.7% 0.237 25.331)", "oklch(70% 0.1 200)"] {
        // older csscolorparser releases do not know oklch()
        let Ok(reference) = input.parse::<csscolorparser::Color>() else {
            continue;
        };
        let reference = reference.to_rgba8();
        let ours = Oklch::parse(input).unwrap().to_hex();
        for (a, b) in [ours.red, ours.green, ours.blue].into_iter().zip(reference) {
            assert!(a.abs_diff(b) <= 2, "{input}: ours {ours}, reference {reference:?}");
        }
    }
}

#[test]
fn values_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Hex>();
    assert_send_sync::<Rgba>();
    assert_send_sync::<Oklch>();
    assert_send_sync::<Color>();
    assert_send_sync::<ColorError>();

    let inputs = ["#ff0000", "rgb(0 255 0)", "oklch(50% 0.1 30)", "#123"];
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || convert(input, TargetFormat::Hex).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(outputs[0], "#ff0000");
    assert_eq!(outputs[1], "#00ff00");
    assert_eq!(outputs[3], "#112233");
}
