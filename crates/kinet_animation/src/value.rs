//! Property values and unit-aware parsing
//!
//! Raw property values are either plain numbers or unit-suffixed strings
//! ("100px", "50%"). Parsing follows the numeric-prefix-then-trailing-unit
//! convention; an unparseable value degrades to `{0.0, ""}` at the public
//! boundary rather than failing the animation.

use std::fmt;

use crate::error::{AnimationError, Result};

/// A raw property value as read from or written to a target
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A value split into its numeric magnitude and trailing unit
///
/// The unit is the empty string for dimensionless values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedValue {
    pub magnitude: f64,
    pub unit: String,
}

impl ParsedValue {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// A dimensionless value
    pub fn number(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: String::new(),
        }
    }

    /// Render back to a raw property value
    pub fn to_property_value(&self) -> PropertyValue {
        if self.unit.is_empty() {
            PropertyValue::Number(self.magnitude)
        } else {
            PropertyValue::Text(format!("{}{}", self.magnitude, self.unit))
        }
    }
}

/// Parse a raw value, degrading to `{0.0, ""}` on malformed input
pub fn parse(raw: &PropertyValue) -> ParsedValue {
    match raw {
        PropertyValue::Number(n) => ParsedValue::number(*n),
        PropertyValue::Text(s) => try_parse_text(s).unwrap_or_else(|err| {
            tracing::warn!("{err}, treating as 0");
            ParsedValue::default()
        }),
    }
}

/// Parse a unit-suffixed string: optional sign, decimal magnitude, then the
/// remainder of the string as the unit
pub fn try_parse_text(raw: &str) -> Result<ParsedValue> {
    let bytes = raw.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    // Consume a decimal point only when a fractional digit follows
    if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return Err(AnimationError::Unparseable {
            raw: raw.to_string(),
        });
    }

    let magnitude = raw[..i]
        .parse::<f64>()
        .map_err(|_| AnimationError::Unparseable {
            raw: raw.to_string(),
        })?;

    Ok(ParsedValue::new(magnitude, &raw[i..]))
}

/// Linear interpolation between two magnitudes
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Clamp a value to `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(
            parse(&PropertyValue::Number(42.5)),
            ParsedValue::number(42.5)
        );
        assert_eq!(
            parse(&PropertyValue::Text("17".into())),
            ParsedValue::number(17.0)
        );
    }

    #[test]
    fn parses_unit_suffixed_strings() {
        assert_eq!(
            parse(&PropertyValue::Text("100px".into())),
            ParsedValue::new(100.0, "px")
        );
        assert_eq!(
            parse(&PropertyValue::Text("-3.5em".into())),
            ParsedValue::new(-3.5, "em")
        );
        assert_eq!(
            parse(&PropertyValue::Text("50%".into())),
            ParsedValue::new(50.0, "%")
        );
        assert_eq!(
            parse(&PropertyValue::Text("+.5".into())),
            ParsedValue::new(0.5, "")
        );
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        assert_eq!(
            parse(&PropertyValue::Text("opaque".into())),
            ParsedValue::default()
        );
        assert_eq!(parse(&PropertyValue::Text("".into())), ParsedValue::default());
        assert!(try_parse_text("px100").is_err());
    }

    #[test]
    fn renders_back_with_unit() {
        assert_eq!(
            ParsedValue::new(12.0, "px").to_property_value(),
            PropertyValue::Text("12px".into())
        );
        assert_eq!(
            ParsedValue::number(0.5).to_property_value(),
            PropertyValue::Number(0.5)
        );
    }

    #[test]
    fn lerp_and_clamp() {
        assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-12);
        assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < 1e-12);
        assert_eq!(clamp(-100.0, 0.0, 1000.0), 0.0);
        assert_eq!(clamp(1500.0, 0.0, 1000.0), 1000.0);
    }
}
