//! Calendar month keys and their chart labels
//!
//! Monthly grouping is keyed by `(year, month)` and sorted on that pair.
//! Labels are produced from the key for display only and are never parsed
//! back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month; orders chronologically (year first, then month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    /// 1-12
    month: u32,
}

impl MonthKey {
    /// Returns `None` unless `month` is in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Month abbreviation set used for "Mon YYYY" labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonthNames {
    /// Jan, Feb, Mar, Apr, Mei, Jun, Jul, Agu, Sep, Okt, Nov, Des
    #[default]
    Indonesian,
    /// Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec
    English,
}

const INDONESIAN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const ENGLISH: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthNames {
    pub fn abbreviation(&self, month: u32) -> &'static str {
        let table = match self {
            Self::Indonesian => &INDONESIAN,
            Self::English => &ENGLISH,
        };
        table[(month.clamp(1, 12) - 1) as usize]
    }

    /// "Mon YYYY" label for a month
    pub fn label(&self, key: MonthKey) -> String {
        format!("{} {}", self.abbreviation(key.month), key.year)
    }

    /// Parse from a user-supplied string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "indonesian" | "id" | "id-id" => Some(Self::Indonesian),
            "english" | "en" | "en-us" => Some(Self::English),
            _ => None,
        }
    }
}

impl fmt::Display for MonthNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indonesian => write!(f, "indonesian"),
            Self::English => write!(f, "english"),
        }
    }
}
