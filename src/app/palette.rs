use crate::domain::model::Direction;
use crate::core::codec::to_severity;

/// Presentation-owned color classes for severity. The core emits plain
/// domain values; every color/label decision lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    SevereNegative,
    Negative,
    Neutral,
    Positive,
    SeverePositive,
}

impl ColorClass {
    pub fn for_severity(severity: i8) -> Self {
        if severity > 1 {
            ColorClass::SeverePositive
        } else if severity > 0 {
            ColorClass::Positive
        } else if severity < -1 {
            ColorClass::SevereNegative
        } else if severity < 0 {
            ColorClass::Negative
        } else {
            ColorClass::Neutral
        }
    }

    pub fn for_direction(direction: Direction) -> Self {
        Self::for_severity(to_severity(direction))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorClass::SevereNegative => "severe-negative",
            ColorClass::Negative => "negative",
            ColorClass::Neutral => "neutral",
            ColorClass::Positive => "positive",
            ColorClass::SeverePositive => "severe-positive",
        }
    }

    /// ANSI foreground for terminal rendering.
    pub fn ansi(&self) -> &'static str {
        match self {
            ColorClass::SevereNegative => "\x1b[1;31m",
            ColorClass::Negative => "\x1b[31m",
            ColorClass::Neutral => "\x1b[33m",
            ColorClass::Positive => "\x1b[32m",
            ColorClass::SeverePositive => "\x1b[1;32m",
        }
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

/// Normalize a severity to a 0-100 bar percentage (25 points per step).
pub fn bar_percent(severity: i8) -> u8 {
    (severity.unsigned_abs() as u16 * 25).min(100) as u8
}
