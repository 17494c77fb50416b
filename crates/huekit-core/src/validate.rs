use crate::color::format::ColorFormat;
use crate::error::{HueError, Result};

/// Construction-time check shared by every palette constructor.
pub fn validate_palette(colors: &[String]) -> Result<()> {
    // Index lookups take `n mod size`; an empty palette has no valid index.
    if colors.is_empty() {
        return Err(HueError::InvalidArgument(
            "palette must contain at least one color".into(),
        ));
    }

    // Detection only: entries keep whatever syntax they were given
    // (e.g. "#fff") and are parsed lazily by callers.
    for c in colors {
        ColorFormat::detect(c)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(
            validate_palette(&[]),
            Err(HueError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_entry_is_rejected() {
        let colors = vec!["#000".to_string(), "teal".to_string()];
        assert_eq!(
            validate_palette(&colors),
            Err(HueError::UnrecognizedFormat("teal".into()))
        );
    }

    #[test]
    fn short_hex_passes_detection() {
        let colors = vec!["#000".to_string(), "#fff".to_string()];
        assert!(validate_palette(&colors).is_ok());
    }
}
