//! Rendered artifact formats.

/// Output format for rendered diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raster image (default).
    #[default]
    Png,
    /// Vector image.
    Svg,
    /// ASCII-art rendering.
    Txt,
}

impl OutputFormat {
    /// Parse format from a flag value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Format name as used in the server URL path and file extensions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Txt => "txt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::parse("svg"), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Txt));
        assert_eq!(OutputFormat::parse("jpeg"), None);
        assert_eq!(OutputFormat::parse(""), None);
    }

    #[test]
    fn test_format_as_str() {
        assert_eq!(OutputFormat::Png.as_str(), "png");
        assert_eq!(OutputFormat::Svg.as_str(), "svg");
        assert_eq!(OutputFormat::Txt.as_str(), "txt");
    }

    #[test]
    fn test_format_round_trip() {
        for format in [OutputFormat::Png, OutputFormat::Svg, OutputFormat::Txt] {
            assert_eq!(OutputFormat::parse(format.as_str()), Some(format));
        }
    }
}
