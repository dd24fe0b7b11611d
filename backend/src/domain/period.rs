//! Inclusive date ranges used by bookings.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors raised by [`Period::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodValidationError {
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart { start, end } => {
                write!(f, "period end {end} must not be before start {start}")
            }
        }
    }
}

impl std::error::Error for PeriodValidationError {}

/// Inclusive range of calendar days.
///
/// ## Invariants
/// - `start <= end`; a single-day stay has `start == end`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rental::domain::Period;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 4).expect("valid date");
/// let end = NaiveDate::from_ymd_opt(2020, 3, 6).expect("valid date");
/// let period = Period::new(start, end)?;
/// assert_eq!(period.day_count(), 3);
/// # Ok::<(), rental::domain::PeriodValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodDto", into = "PeriodDto")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Build a period, rejecting ranges that end before they start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodValidationError> {
        if end < start {
            return Err(PeriodValidationError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the period, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the period in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Number of days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PeriodDto {
    start: NaiveDate,
    end: NaiveDate,
}

impl From<Period> for PeriodDto {
    fn from(value: Period) -> Self {
        Self {
            start: value.start,
            end: value.end,
        }
    }
}

impl TryFrom<PeriodDto> for Period {
    type Error = PeriodValidationError;

    fn try_from(value: PeriodDto) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}
