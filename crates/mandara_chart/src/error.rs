use std::error::Error;
use std::fmt;

use mandara_vedic::Graha;

/// Errors raised while assembling a chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The position source omitted a graha the chart requires.
    MissingGraha(Graha),
    /// The position source itself failed.
    Provider(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGraha(g) => {
                write!(f, "position source returned no longitude for {}", g.name())
            }
            Self::Provider(msg) => write!(f, "position source error: {msg}"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_graha() {
        let e = ChartError::MissingGraha(Graha::Venus);
        assert!(e.to_string().contains("Venus"));
    }

    #[test]
    fn display_carries_provider_message() {
        let e = ChartError::Provider("ephemeris file truncated".into());
        assert!(e.to_string().contains("ephemeris file truncated"));
    }
}
