//! Fixed holiday calendar and week tagging.
//!
//! The calendar is an exact-date table: a week is tagged with a named
//! holiday only when its date matches a published occurrence exactly, with
//! no weekly-tolerance matching. The holiday flag decides *whether* a week
//! is tagged at all; the calendar only supplies the *name*. Flagged weeks
//! whose date is not in the calendar fall back to [`Holiday::Other`].

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named holiday week, or the fallback for flagged weeks outside the
/// published calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    SuperBowl,
    LaborDay,
    Thanksgiving,
    Christmas,
    Other,
}

impl Holiday {
    /// The holidays with published occurrence dates (excludes the fallback).
    pub const NAMED: [Holiday; 4] = [
        Holiday::SuperBowl,
        Holiday::LaborDay,
        Holiday::Thanksgiving,
        Holiday::Christmas,
    ];

    /// Label used in reports and exports.
    pub fn display_name(self) -> &'static str {
        match self {
            Holiday::SuperBowl => "Super Bowl",
            Holiday::LaborDay => "Labor Day",
            Holiday::Thanksgiving => "Thanksgiving",
            Holiday::Christmas => "Christmas",
            Holiday::Other => "Other Holiday",
        }
    }

    /// Published week-ending dates for each named holiday.
    fn occurrences(self) -> &'static [(i32, u32, u32)] {
        match self {
            Holiday::SuperBowl => &[(2010, 2, 12), (2011, 2, 11), (2012, 2, 10)],
            Holiday::LaborDay => &[(2010, 9, 10), (2011, 9, 9), (2012, 9, 7)],
            Holiday::Thanksgiving => &[(2010, 11, 26), (2011, 11, 25)],
            Holiday::Christmas => &[(2010, 12, 31), (2011, 12, 30)],
            Holiday::Other => &[],
        }
    }

    /// Exact-date calendar lookup.
    pub fn from_date(date: NaiveDate) -> Option<Holiday> {
        calendar().get(&date).copied()
    }

    /// Tag a week. The flag takes precedence: unflagged weeks are never
    /// tagged even when their date is in the calendar, and flagged weeks
    /// with an unrecognized date fall back to `Other`.
    pub fn for_week(date: NaiveDate, holiday_flag: bool) -> Option<Holiday> {
        if !holiday_flag {
            return None;
        }
        Some(Self::from_date(date).unwrap_or(Holiday::Other))
    }
}

/// Exact-match date table, built once on first use.
fn calendar() -> &'static HashMap<NaiveDate, Holiday> {
    static CALENDAR: OnceLock<HashMap<NaiveDate, Holiday>> = OnceLock::new();
    CALENDAR.get_or_init(|| {
        let mut table = HashMap::new();
        for holiday in Holiday::NAMED {
            for &(year, month, day) in holiday.occurrences() {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    table.insert(date, holiday);
                }
            }
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn calendar_matches_exact_dates_only() {
        assert_eq!(Holiday::from_date(date(2010, 2, 12)), Some(Holiday::SuperBowl));
        assert_eq!(Holiday::from_date(date(2012, 9, 7)), Some(Holiday::LaborDay));
        // One day off a published occurrence is not a match.
        assert_eq!(Holiday::from_date(date(2010, 2, 11)), None);
        assert_eq!(Holiday::from_date(date(2099, 1, 1)), None);
    }

    #[test]
    fn flagged_calendar_date_gets_the_named_holiday() {
        assert_eq!(
            Holiday::for_week(date(2010, 2, 12), true),
            Some(Holiday::SuperBowl)
        );
    }

    #[test]
    fn flagged_unknown_date_falls_back_to_other() {
        assert_eq!(Holiday::for_week(date(2099, 1, 1), true), Some(Holiday::Other));
    }

    #[test]
    fn flag_takes_precedence_over_the_calendar() {
        // A calendar date with the flag off is not tagged.
        assert_eq!(Holiday::for_week(date(2010, 2, 12), false), None);
    }

    #[test]
    fn display_names_are_the_published_labels() {
        assert_eq!(Holiday::SuperBowl.display_name(), "Super Bowl");
        assert_eq!(Holiday::Other.display_name(), "Other Holiday");
    }
}
