use huekit_core::ColorFormat;

#[test]
fn rgba_is_not_taken_by_rgb() {
    assert_eq!(ColorFormat::detect("rgba(1,2,3,0.5)").unwrap(), ColorFormat::Rgba);
    assert!(!ColorFormat::Rgb.is_type_of("rgba(1,2,3,0.5)"));
}

#[test]
fn hsla_is_not_taken_by_hsl() {
    assert_eq!(ColorFormat::detect("hsla(1,2%,3%,0.5)").unwrap(), ColorFormat::Hsla);
    assert!(!ColorFormat::Hsl.is_type_of("hsla(1,2%,3%,0.5)"));
}

#[test]
fn precedence_ignores_case() {
    assert_eq!(ColorFormat::detect("RgBa(1,2,3,0.5)").unwrap(), ColorFormat::Rgba);
    assert_eq!(ColorFormat::detect("HSLA(1,2%,3%,0.5)").unwrap(), ColorFormat::Hsla);
}

#[test]
fn detection_is_prefix_only() {
    // Syntax past the prefix is not checked until a value is extracted.
    assert_eq!(ColorFormat::detect("rgb???").unwrap(), ColorFormat::Rgb);
    assert!(ColorFormat::to_rgb("rgb???").is_err());
}
