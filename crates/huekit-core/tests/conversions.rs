use huekit_core::color::space::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
use huekit_core::{ColorFormat, HueError};

#[test]
fn pure_red_to_hsl() {
    assert_eq!(rgb_to_hsl([255, 0, 0]), [0, 100, 50]);
}

#[test]
fn pure_red_from_hsl() {
    assert_eq!(hsl_to_rgb([0, 100, 50]), [255, 0, 0]);
}

#[test]
fn rgba_to_hsla_keeps_alpha() {
    assert_eq!(
        ColorFormat::Hsla.convert("rgba(255,0,0,0.5)").unwrap(),
        "hsla(0,100%,50%,0.5)"
    );
}

#[test]
fn opaque_alpha_keeps_decimal_point() {
    assert_eq!(ColorFormat::Rgba.convert("rgb(1,2,3)").unwrap(), "rgba(1,2,3,1.0)");
    assert_eq!(ColorFormat::Hsla.convert("#ff0000").unwrap(), "hsla(0,100%,50%,1.0)");
    assert_eq!(
        huekit_core::palette::builtin::RED_TO_GREEN.color_at(0),
        "hsla(0,100%,50%,1.0)"
    );
}

#[test]
fn saturated_hue_ramp_round_trips_through_hsl() {
    for h in 0..360 {
        let rgb = hsl_to_rgb([h, 100, 50]);
        let back = hsl_to_rgb(rgb_to_hsl(rgb));
        for i in 0..3 {
            assert!((back[i] - rgb[i]).abs() <= 1, "h={h} rgb={rgb:?} back={back:?}");
        }
    }
}

#[test]
fn saturated_hue_ramp_round_trips_through_hsv() {
    for h in 0..360 {
        let rgb = hsv_to_rgb([h, 100, 100]);
        let back = hsv_to_rgb(rgb_to_hsv(rgb));
        for i in 0..3 {
            assert!((back[i] - rgb[i]).abs() <= 1, "h={h} rgb={rgb:?} back={back:?}");
        }
    }
}

#[test]
fn every_format_from_one_hex_source() {
    let c = "#1f77b4";
    assert_eq!(ColorFormat::Hex.convert(c).unwrap(), "#1f77b4");
    assert_eq!(ColorFormat::Rgb.convert(c).unwrap(), "rgb(31,119,180)");
    assert_eq!(ColorFormat::Rgba.convert(c).unwrap(), "rgba(31,119,180,1.0)");
    assert_eq!(ColorFormat::Hsl.convert(c).unwrap(), "hsl(205,71%,41%)");
    assert_eq!(ColorFormat::Hsla.convert(c).unwrap(), "hsla(205,71%,41%,1.0)");
}

#[test]
fn hsl_source_to_rgb_and_hex() {
    assert_eq!(ColorFormat::Rgb.convert("hsl(240, 100%, 50%)").unwrap(), "rgb(0,0,255)");
    // Channels below 16 lose their leading zero.
    assert_eq!(ColorFormat::Hex.convert("hsl(240, 100%, 50%)").unwrap(), "#00ff");
}

#[test]
fn convert_is_idempotent_per_format() {
    let sources = ["#1f77b4", "rgb(200,100,50)", "rgba(20,30,40,0.75)", "hsl(10,60%,40%)", "hsla(300,20%,70%,0.1)"];
    for target in ColorFormat::ALL {
        for src in sources {
            let once = target.convert(src).unwrap();
            let twice = target.convert(&once).unwrap();
            assert_eq!(once, twice, "target={target} src={src}");
        }
    }
}

#[test]
fn failures_are_reported_not_defaulted() {
    assert!(matches!(
        ColorFormat::Rgb.convert("cornflowerblue"),
        Err(HueError::UnrecognizedFormat(_))
    ));
    assert!(matches!(
        ColorFormat::Hsl.convert("rgb(1;2;3)"),
        Err(HueError::MalformedColorString { .. })
    ));
    assert!(matches!(
        ColorFormat::to_alpha("rgba(1,2,3)"),
        Err(HueError::MalformedColorString { .. })
    ));
}
