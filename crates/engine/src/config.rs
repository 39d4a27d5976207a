use serde::Deserialize;

use crate::error::StyleError;

/// Report presentation knobs. Column and rule widths are fixed by the report
/// format; only the text and the decimal precision vary.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportStyle {
    #[serde(default = "default_title")]
    pub title: String,
    /// Volume unit shown in the title line.
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_station_decimals")]
    pub station_decimals: u8,
    #[serde(default = "default_volume_decimals")]
    pub volume_decimals: u8,
}

fn default_title() -> String {
    "EARTHWORK VOLUME REPORT".into()
}

fn default_unit() -> String {
    "m\u{00b3}".into()
}

fn default_station_decimals() -> u8 {
    3
}

fn default_volume_decimals() -> u8 {
    2
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            title: default_title(),
            unit: default_unit(),
            station_decimals: default_station_decimals(),
            volume_decimals: default_volume_decimals(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ReportStyle {
    pub fn from_toml(input: &str) -> Result<Self, StyleError> {
        let style: ReportStyle =
            toml::from_str(input).map_err(|e| StyleError::Parse(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.title.trim().is_empty() {
            return Err(StyleError::Validation("title must not be blank".into()));
        }

        if self.unit.trim().is_empty() {
            return Err(StyleError::Validation("unit must not be blank".into()));
        }

        // More than 6 decimals overflows a 12-char column for ordinary values.
        if self.station_decimals > 6 {
            return Err(StyleError::Validation(format!(
                "station_decimals must be at most 6, got {}",
                self.station_decimals
            )));
        }
        if self.volume_decimals > 6 {
            return Err(StyleError::Validation(format!(
                "volume_decimals must be at most 6, got {}",
                self.volume_decimals
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let style = ReportStyle::from_toml("").unwrap();
        assert_eq!(style.title, "EARTHWORK VOLUME REPORT");
        assert_eq!(style.unit, "m\u{00b3}");
        assert_eq!(style.station_decimals, 3);
        assert_eq!(style.volume_decimals, 2);
    }

    #[test]
    fn default_matches_from_toml_defaults() {
        let parsed = ReportStyle::from_toml("").unwrap();
        let built = ReportStyle::default();
        assert_eq!(parsed.title, built.title);
        assert_eq!(parsed.unit, built.unit);
        assert_eq!(parsed.station_decimals, built.station_decimals);
        assert_eq!(parsed.volume_decimals, built.volume_decimals);
    }

    #[test]
    fn parse_overrides() {
        let input = r#"
title = "STAGE 2 EARTHWORKS"
unit = "yd3"
station_decimals = 2
volume_decimals = 1
"#;
        let style = ReportStyle::from_toml(input).unwrap();
        assert_eq!(style.title, "STAGE 2 EARTHWORKS");
        assert_eq!(style.unit, "yd3");
        assert_eq!(style.station_decimals, 2);
        assert_eq!(style.volume_decimals, 1);
    }

    #[test]
    fn reject_blank_title() {
        let err = ReportStyle::from_toml("title = \"  \"").unwrap_err();
        assert!(err.to_string().contains("title must not be blank"));
    }

    #[test]
    fn reject_excess_station_decimals() {
        let err = ReportStyle::from_toml("station_decimals = 7").unwrap_err();
        assert!(err.to_string().contains("station_decimals must be at most 6"));
    }

    #[test]
    fn reject_excess_volume_decimals() {
        let err = ReportStyle::from_toml("volume_decimals = 9").unwrap_err();
        assert!(err.to_string().contains("volume_decimals must be at most 6"));
    }

    #[test]
    fn reject_malformed_toml() {
        let err = ReportStyle::from_toml("title = ").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }
}
