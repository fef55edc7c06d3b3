use super::error::DomainError;

/// Half-open date interval `[start, end)` over ISO-8601 date strings
///
/// Dates compare as raw strings, so callers must use a format in which
/// lexical order equals chronological order (e.g. `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    /// Create a range, rejecting `start > end`. An empty range (`start == end`) is allowed.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, DomainError> {
        let start = start.into();
        let end = end.into();

        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// True when `start <= date < end`
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date < self.end.as_str()
    }
}
