//! Waterfall configuration and its validation.
//!
//! Hosts hand configuration over as raw property strings (the component
//! attribute surface) or as a typed [`CascadeConfig`] loaded from settings.
//! Validation never fails: every malformed or out-of-range value is replaced
//! by its documented default and logged, so a bad property can degrade the
//! layout but not break it.
//!
//! Defaults: 1 column, `auto` width, `normal` gap.
//!
//! # Example
//!
//! ```
//! use horizon_cascade::{CascadeConfig, ColumnGap, ConfigProps};
//!
//! let config = CascadeConfig::resolve(&ConfigProps {
//!     column_count: Some("3"),
//!     column_width: None,
//!     column_gap: Some("-5"), // rejected, falls back to normal
//! });
//! assert_eq!(config.column_count, 3);
//! assert_eq!(config.column_gap, ColumnGap::Normal);
//! ```

use serde::{Deserialize, Serialize};

/// Gap applied between columns for [`ColumnGap::Normal`], in pixels.
pub const NORMAL_GAP: f32 = 16.0;

/// Column width policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidth {
    /// Divide the available width evenly: each column gets
    /// `100 / columnCount` percent.
    Auto,
    /// Fixed width in pixels.
    Px(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Auto
    }
}

/// Gap between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnGap {
    /// The host's normal gap ([`NORMAL_GAP`] pixels).
    Normal,
    /// Fixed gap in pixels.
    Px(f32),
}

impl Default for ColumnGap {
    fn default() -> Self {
        Self::Normal
    }
}

/// Raw, unvalidated configuration properties as the host supplies them.
///
/// `None` means the property was not set and the default applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigProps<'a> {
    /// Raw `columnCount` property.
    pub column_count: Option<&'a str>,
    /// Raw `columnWidth` property.
    pub column_width: Option<&'a str>,
    /// Raw `columnGap` property.
    pub column_gap: Option<&'a str>,
}

/// Validated waterfall configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Number of columns in the grid. Always at least 1.
    pub column_count: usize,
    /// Width policy for each column.
    pub column_width: ColumnWidth,
    /// Gap between adjacent columns.
    pub column_gap: ColumnGap,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            column_count: 1,
            column_width: ColumnWidth::default(),
            column_gap: ColumnGap::default(),
        }
    }
}

impl CascadeConfig {
    /// Build a configuration with the given column count and default width
    /// and gap. A zero count falls back to 1.
    pub fn with_columns(column_count: usize) -> Self {
        Self {
            column_count: sanitize_count(column_count),
            ..Self::default()
        }
    }

    /// Validate raw host properties, substituting the documented default for
    /// every missing or invalid value.
    ///
    /// Never fails; each rejected value is logged under the
    /// `horizon_cascade::config` target.
    pub fn resolve(props: &ConfigProps<'_>) -> Self {
        let column_count = match props.column_count {
            None => 1,
            Some(raw) => match parse_positive(raw) {
                Some(n) => n as usize,
                None => {
                    tracing::warn!(
                        target: "horizon_cascade::config",
                        value = raw,
                        "invalid column_count, falling back to 1"
                    );
                    1
                }
            },
        };

        let column_width = match props.column_width {
            None => ColumnWidth::Auto,
            Some(raw) if raw.trim().eq_ignore_ascii_case("auto") => ColumnWidth::Auto,
            Some(raw) => match parse_positive(raw) {
                Some(n) => ColumnWidth::Px(n as f32),
                None => {
                    tracing::warn!(
                        target: "horizon_cascade::config",
                        value = raw,
                        "invalid column_width, falling back to auto"
                    );
                    ColumnWidth::Auto
                }
            },
        };

        let column_gap = match props.column_gap {
            None => ColumnGap::Normal,
            Some(raw) if raw.trim().eq_ignore_ascii_case("normal") => ColumnGap::Normal,
            Some(raw) => match parse_positive(raw) {
                Some(n) => ColumnGap::Px(n as f32),
                None => {
                    tracing::warn!(
                        target: "horizon_cascade::config",
                        value = raw,
                        "invalid column_gap, falling back to normal"
                    );
                    ColumnGap::Normal
                }
            },
        };

        Self {
            column_count,
            column_width,
            column_gap,
        }
    }

    /// Re-apply validation to an already-typed configuration.
    ///
    /// Catches a hand-constructed `column_count` of 0 before it reaches the
    /// layout; width and gap variants are valid by construction.
    pub fn normalized(self) -> Self {
        Self {
            column_count: sanitize_count(self.column_count),
            ..self
        }
    }

    /// Per-column width hint as a percentage of the available width.
    ///
    /// Meaningful for [`ColumnWidth::Auto`]; fixed-width columns ignore it.
    pub fn column_width_percent(&self) -> f32 {
        100.0 / self.column_count as f32
    }

    /// Merge the configured values with computed defaults into the concrete
    /// style each column container is created with.
    pub fn column_style(&self) -> ColumnStyle {
        let width = match self.column_width {
            ColumnWidth::Auto => ColumnWidthStyle::Percent(self.column_width_percent()),
            ColumnWidth::Px(px) => ColumnWidthStyle::Px(px),
        };
        let gap = match self.column_gap {
            ColumnGap::Normal => NORMAL_GAP,
            ColumnGap::Px(px) => px,
        };
        ColumnStyle { width, gap }
    }
}

/// Concrete column width after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidthStyle {
    /// Percentage of the available width.
    Percent(f32),
    /// Fixed pixel width.
    Px(f32),
}

/// Concrete style a column container is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStyle {
    /// Resolved column width.
    pub width: ColumnWidthStyle,
    /// Resolved gap between adjacent columns, in pixels.
    pub gap: f32,
}

fn sanitize_count(count: usize) -> usize {
    if count == 0 {
        tracing::warn!(
            target: "horizon_cascade::config",
            "column_count of 0 is invalid, falling back to 1"
        );
        1
    } else {
        count
    }
}

/// Parse a strictly positive integer property value.
fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = CascadeConfig::resolve(&ConfigProps::default());
        assert_eq!(config, CascadeConfig::default());
        assert_eq!(config.column_count, 1);
        assert_eq!(config.column_width, ColumnWidth::Auto);
        assert_eq!(config.column_gap, ColumnGap::Normal);
    }

    #[test]
    fn test_valid_properties_parse() {
        let config = CascadeConfig::resolve(&ConfigProps {
            column_count: Some("3"),
            column_width: Some("240"),
            column_gap: Some("8"),
        });
        assert_eq!(config.column_count, 3);
        assert_eq!(config.column_width, ColumnWidth::Px(240.0));
        assert_eq!(config.column_gap, ColumnGap::Px(8.0));
    }

    #[test]
    fn test_negative_gap_falls_back_to_normal() {
        let config = CascadeConfig::resolve(&ConfigProps {
            column_gap: Some("-5"),
            ..ConfigProps::default()
        });
        assert_eq!(config.column_gap, ColumnGap::Normal);
    }

    #[test]
    fn test_malformed_values_fall_back_per_key() {
        let config = CascadeConfig::resolve(&ConfigProps {
            column_count: Some("zero"),
            column_width: Some("0"),
            column_gap: Some("12"),
        });
        assert_eq!(config.column_count, 1);
        assert_eq!(config.column_width, ColumnWidth::Auto);
        // A bad sibling does not poison a valid key.
        assert_eq!(config.column_gap, ColumnGap::Px(12.0));
    }

    #[test]
    fn test_keyword_values_ignore_case_and_space() {
        let config = CascadeConfig::resolve(&ConfigProps {
            column_width: Some(" AUTO "),
            column_gap: Some("Normal"),
            ..ConfigProps::default()
        });
        assert_eq!(config.column_width, ColumnWidth::Auto);
        assert_eq!(config.column_gap, ColumnGap::Normal);
    }

    #[test]
    fn test_normalization_rescues_zero_count() {
        let config = CascadeConfig {
            column_count: 0,
            ..CascadeConfig::default()
        };
        assert_eq!(config.normalized().column_count, 1);
        assert_eq!(CascadeConfig::with_columns(0).column_count, 1);
    }

    #[test]
    fn test_width_hint_divides_evenly() {
        let config = CascadeConfig::with_columns(4);
        assert_eq!(config.column_width_percent(), 25.0);

        let style = config.column_style();
        assert_eq!(style.width, ColumnWidthStyle::Percent(25.0));
        assert_eq!(style.gap, NORMAL_GAP);
    }

    #[test]
    fn test_fixed_style_passes_through() {
        let config = CascadeConfig {
            column_count: 2,
            column_width: ColumnWidth::Px(300.0),
            column_gap: ColumnGap::Px(4.0),
        };
        let style = config.column_style();
        assert_eq!(style.width, ColumnWidthStyle::Px(300.0));
        assert_eq!(style.gap, 4.0);
    }

    #[test]
    fn test_settings_round_trip() {
        let config = CascadeConfig {
            column_count: 3,
            column_width: ColumnWidth::Px(220.0),
            column_gap: ColumnGap::Normal,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CascadeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        // Missing keys take defaults on load.
        let sparse: CascadeConfig = serde_json::from_str(r#"{"column_count": 2}"#).unwrap();
        assert_eq!(sparse.column_count, 2);
        assert_eq!(sparse.column_width, ColumnWidth::Auto);
    }
}
