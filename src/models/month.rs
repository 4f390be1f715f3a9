use chrono::{Datelike, Local, NaiveDate};

/// A calendar month used as a budgeting key. Displays as zero-padded
/// `YYYY-MM`, which is also the prefix matched against transaction dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub(crate) fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing today's local date.
    pub(crate) fn current() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    /// Parse a `YYYY-MM` string. Rejects out-of-range months and anything
    /// that is not exactly year-dash-month.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let (year_part, month_part) = s.split_once('-')?;
        let year: i32 = year_part.parse().ok()?;
        let month: u32 = month_part.parse().ok()?;
        Self::new(year, month)
    }

    /// Month navigation is unbounded in both directions.
    pub(crate) fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub(crate) fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of days in this month, leap-aware: day zero of the following
    /// month is the last day of this one.
    pub(crate) fn days(&self) -> i64 {
        let next = self.next();
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let first_of_next = NaiveDate::from_ymd_opt(next.year, next.month, 1);
        match (first, first_of_next) {
            (Some(a), Some(b)) => (b - a).num_days(),
            // Unreachable for any month this type can hold; 30 keeps the
            // arithmetic sane rather than panicking mid-render.
            _ => 30,
        }
    }

    /// Whether a `YYYY-MM-DD` date string falls inside this month.
    pub(crate) fn contains_date(&self, date: &str) -> bool {
        date.starts_with(&self.to_string())
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
