//! Tests for parameter ranges and colour parsing.

use super::*;

/// Ensures the half-open dimension range rejects zero but accepts its max.
#[test]
fn dimension_range_is_half_open() {
    assert!(!DIMENSION_RANGE.contains(0.0));
    assert!(DIMENSION_RANGE.contains(0.5));
    assert!(DIMENSION_RANGE.contains(500.0));
    assert!(!DIMENSION_RANGE.contains(500.01));
}

/// Validates `check` reports the offending parameter.
///
/// # Examples
/// ```
/// use config::constants::SECTION_RANGE;
/// assert!(SECTION_RANGE.check("rows", 1.0).is_err());
/// ```
#[test]
fn check_reports_name_and_bounds() {
    assert_eq!(
        SECTION_RANGE.check("rows", 1.0).unwrap_err(),
        ConfigError::OutOfRange {
            name: "rows",
            value: 1.0,
            min: 2.0,
            max: 10.0,
        }
    );
    assert_eq!(
        WALL_THICKNESS_RANGE.check("wallThickness", f64::NAN).unwrap_err(),
        ConfigError::NonFinite("wallThickness")
    );
    assert_eq!(WALL_THICKNESS_RANGE.check("wallThickness", 0.4), Ok(0.4));
}

#[test]
fn defaults_are_inside_their_ranges() {
    assert!(DIMENSION_RANGE.contains(DEFAULT_WIDTH));
    assert!(DIMENSION_RANGE.contains(DEFAULT_DEPTH));
    assert!(DIMENSION_RANGE.contains(DEFAULT_HEIGHT));
    assert!(SECTION_RANGE.contains(DEFAULT_ROWS as f64));
    assert!(SECTION_RANGE.contains(DEFAULT_COLS as f64));
    assert!(WALL_THICKNESS_RANGE.contains(DEFAULT_WALL_THICKNESS));
}

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(parse_hex_color("#ffffff").unwrap(), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(parse_hex_color("#fff").unwrap(), [1.0, 1.0, 1.0, 1.0]);
    let rgba = parse_hex_color("#336699").unwrap();
    assert!((rgba[0] - 0.2).abs() < 1e-6);
    assert!((rgba[1] - 0.4).abs() < 1e-6);
    assert!((rgba[2] - 0.6).abs() < 1e-6);
}

#[test]
fn rejects_malformed_colours() {
    for bad in ["", "000000", "#12", "#12345", "#gggggg", "#ff00ff00"] {
        assert!(
            matches!(parse_hex_color(bad), Err(ConfigError::InvalidColor(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn error_messages_are_readable() {
    let err = DIMENSION_RANGE.check("width", 900.0).unwrap_err();
    assert!(err.to_string().contains("width"));
    assert!(err.to_string().contains("900"));
}
