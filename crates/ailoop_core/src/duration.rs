//! ISO-8601 `PT#H#M#S` durations as reported by `contentDetails.duration`.
use std::fmt;

const DESIGNATOR: &str = "PT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsoDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("no `PT` time designator in {0:?}")]
    MissingDesignator(String),
    #[error("duration component out of range in {0:?}")]
    Overflow(String),
}

impl IsoDuration {
    pub fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }
}

/// Clock format: `H:MM:SS` when hours are present, `M:SS` otherwise.
impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// Parses the first `PT` designator found in `input`, taking the optional
/// `nH`, `nM` and `nS` components in that order. Anything after the last
/// recognised component is ignored, and a bare `PT` is a zero duration.
pub fn parse_iso_duration(input: &str) -> Result<IsoDuration, DurationError> {
    let start = input
        .find(DESIGNATOR)
        .ok_or_else(|| DurationError::MissingDesignator(input.to_string()))?;
    let mut rest = &input[start + DESIGNATOR.len()..];
    let mut parsed = IsoDuration::default();

    for (unit, slot) in [
        ('H', &mut parsed.hours),
        ('M', &mut parsed.minutes),
        ('S', &mut parsed.seconds),
    ] {
        if let Some((value, tail)) = take_component(rest, unit) {
            *slot = value
                .parse::<u64>()
                .map_err(|_| DurationError::Overflow(input.to_string()))?;
            rest = tail;
        }
    }

    Ok(parsed)
}

/// Splits `digits` + `unit` off the front of `input`, if present.
fn take_component(input: &str, unit: char) -> Option<(&str, &str)> {
    let digits_len = input
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(input.len());
    if digits_len == 0 {
        return None;
    }
    let (digits, tail) = input.split_at(digits_len);
    tail.strip_prefix(unit).map(|tail| (digits, tail))
}

/// Total seconds, or 0 for anything that does not parse.
pub fn duration_seconds(input: &str) -> u64 {
    parse_iso_duration(input)
        .map(|d| d.total_seconds())
        .unwrap_or(0)
}

/// Clock display, or `"0:00"` for anything that does not parse.
pub fn display_duration(input: &str) -> String {
    parse_iso_duration(input)
        .unwrap_or_default()
        .to_string()
}
