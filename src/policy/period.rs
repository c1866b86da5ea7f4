use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{Duration, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Interval {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

impl From<String> for Interval {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Minutes" => Interval::Minutes,
            "Hours" => Interval::Hours,
            "Weeks" => Interval::Weeks,
            "Months" => Interval::Months,
            _ => Interval::Days,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Interval::Minutes => write!(f, "Minutes"),
            Interval::Hours => write!(f, "Hours"),
            Interval::Days => write!(f, "Days"),
            Interval::Weeks => write!(f, "Weeks"),
            Interval::Months => write!(f, "Months"),
        }
    }
}

// Period abstracts the rolling loan or renewal duration of a loan policy.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Period {
    pub duration: i64,
    pub interval: Interval,
}

impl Period {
    pub fn minutes(duration: i64) -> Self {
        Self { duration, interval: Interval::Minutes }
    }

    pub fn hours(duration: i64) -> Self {
        Self { duration, interval: Interval::Hours }
    }

    pub fn days(duration: i64) -> Self {
        Self { duration, interval: Interval::Days }
    }

    pub fn weeks(duration: i64) -> Self {
        Self { duration, interval: Interval::Weeks }
    }

    pub fn months(duration: i64) -> Self {
        Self { duration, interval: Interval::Months }
    }

    // None when the resulting date is unrepresentable.
    pub fn add_to(&self, date: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.interval {
            Interval::Minutes => date.checked_add_signed(Duration::minutes(self.duration)),
            Interval::Hours => date.checked_add_signed(Duration::hours(self.duration)),
            Interval::Days => date.checked_add_signed(Duration::days(self.duration)),
            Interval::Weeks => date.checked_add_signed(Duration::weeks(self.duration)),
            Interval::Months => {
                let months = u32::try_from(self.duration).ok()?;
                date.checked_add_months(Months::new(months))
            }
        }
    }
}
