use crate::domain::model::Direction;
use crate::utils::error::{AtlasError, Result};

/// Signed severity for a directionality symbol. Total over the closed enum.
pub fn to_severity(direction: Direction) -> i8 {
    match direction {
        Direction::SeverelyDecreased => -2,
        Direction::Decreased => -1,
        Direction::Neutral => 0,
        Direction::Increased => 1,
        Direction::SeverelyIncreased => 2,
    }
}

/// Inverse of [`to_severity`]. Severities outside -2..=2 are rejected, never
/// coerced to neutral; an out-of-range value means corrupted data upstream.
pub fn to_symbol(severity: i8) -> Result<Direction> {
    match severity {
        -2 => Ok(Direction::SeverelyDecreased),
        -1 => Ok(Direction::Decreased),
        0 => Ok(Direction::Neutral),
        1 => Ok(Direction::Increased),
        2 => Ok(Direction::SeverelyIncreased),
        value => Err(AtlasError::InvalidSeverity { value }),
    }
}

/// Parse an arrow glyph as it appears in the reference table.
pub fn from_glyph(glyph: &str) -> Result<Direction> {
    match glyph {
        "↓↓" => Ok(Direction::SeverelyDecreased),
        "↓" => Ok(Direction::Decreased),
        "→" => Ok(Direction::Neutral),
        "↑" => Ok(Direction::Increased),
        "↑↑" => Ok(Direction::SeverelyIncreased),
        other => Err(AtlasError::InvalidSymbol {
            glyph: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_severity() {
        for severity in -2..=2i8 {
            assert_eq!(to_severity(to_symbol(severity).unwrap()), severity);
        }
    }

    #[test]
    fn test_round_trip_symbol() {
        for direction in Direction::ALL {
            assert_eq!(to_symbol(to_severity(direction)).unwrap(), direction);
        }
    }

    #[test]
    fn test_out_of_range_severity_rejected() {
        assert!(matches!(
            to_symbol(3),
            Err(AtlasError::InvalidSeverity { value: 3 })
        ));
        assert!(matches!(
            to_symbol(-3),
            Err(AtlasError::InvalidSeverity { value: -3 })
        ));
    }

    #[test]
    fn test_unknown_glyph_rejected() {
        // No silent fallback to neutral for unrecognized markers.
        assert!(matches!(
            from_glyph("↔"),
            Err(AtlasError::InvalidSymbol { .. })
        ));
        assert!(from_glyph("").is_err());
    }

    #[test]
    fn test_glyph_parse_matches_render() {
        for direction in Direction::ALL {
            assert_eq!(from_glyph(direction.glyph()).unwrap(), direction);
        }
    }
}
