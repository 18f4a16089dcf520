//! GEDCOM date values
//!
//! Genealogical dates are frequently partial ("1843", "Jan 1843") or
//! qualified ("ABT 1843"). [`Date`] keeps the precision that was actually
//! recorded so comparisons can give partial credit.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Years apart at which two dates stop earning any credit
const YEAR_TOLERANCE: i32 = 5;

/// How firmly a date was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateQualifier {
    /// Plain date
    Exact,
    /// `ABT`
    About,
    /// `BEF`
    Before,
    /// `AFT`
    After,
    /// `EST`
    Estimated,
    /// `CAL`
    Calculated,
    /// `BET .. AND ..` or `FROM .. TO ..`; the first bound is kept
    Range,
}

impl DateQualifier {
    fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().trim_end_matches('.') {
            "ABT" | "ABOUT" | "C" | "CIRCA" => Some(Self::About),
            "BEF" | "BEFORE" => Some(Self::Before),
            "AFT" | "AFTER" => Some(Self::After),
            "EST" => Some(Self::Estimated),
            "CAL" => Some(Self::Calculated),
            "BET" | "FROM" => Some(Self::Range),
            _ => None,
        }
    }

    fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Exact => None,
            Self::About => Some("Abt."),
            Self::Before => Some("Bef."),
            Self::After => Some("Aft."),
            Self::Estimated => Some("Est."),
            Self::Calculated => Some("Cal."),
            Self::Range => Some("Bet."),
        }
    }
}

/// A possibly partial calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Date {
    /// Calendar year
    pub year: i32,
    /// Month 1-12, if recorded
    pub month: Option<u32>,
    /// Day of month, if recorded
    pub day: Option<u32>,
    /// Qualifier keyword
    pub qualifier: DateQualifier,
}

impl Date {
    /// Parse a GEDCOM date value. Returns `None` when no year can be found or
    /// the day does not exist in the given month.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let mut words: Vec<&str> = value.split_whitespace().collect();
        let mut qualifier = DateQualifier::Exact;

        if let Some(first) = words.first() {
            if let Some(q) = DateQualifier::from_keyword(first) {
                qualifier = q;
                words.remove(0);
            }
        }

        // Only the first bound of a range is kept
        if qualifier == DateQualifier::Range {
            if let Some(end) = words
                .iter()
                .position(|w| w.eq_ignore_ascii_case("AND") || w.eq_ignore_ascii_case("TO"))
            {
                words.truncate(end);
            }
        }

        let (day, month, year) = match words.as_slice() {
            [year] => (None, None, parse_year(year)?),
            [month, year] => (None, Some(parse_month(month)?), parse_year(year)?),
            [day, month, year] => (
                Some(day.parse::<u32>().ok()?),
                Some(parse_month(month)?),
                parse_year(year)?,
            ),
            _ => return None,
        };

        if let (Some(day), Some(month)) = (day, month) {
            NaiveDate::from_ymd_opt(year, month, day)?;
        }

        Some(Self {
            year,
            month,
            day,
            qualifier,
        })
    }

    /// Whether year, month and day are all recorded
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.month.is_some() && self.day.is_some()
    }

    /// Whether the date carries no qualifier
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.qualifier == DateQualifier::Exact
    }

    /// Calendar date, when all components are present
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month?, self.day?)
    }

    /// How close two dates are, in [0, 1].
    ///
    /// | situation | score |
    /// |---|---|
    /// | same year, month and day | 1.0 |
    /// | same year and month, one side lacks the day | 0.9 |
    /// | same year, at least one side year-only | 0.8 |
    /// | same year and month, different days | 0.7 |
    /// | same year, different months | 0.5 |
    /// | `d` years apart, `d < 5` | 0.4 × (1 − d/5) |
    ///
    /// A qualifier on either side caps the score at 0.9.
    #[must_use]
    pub fn similarity(&self, other: &Self) -> f64 {
        let score = if self.year == other.year {
            match ((self.month, self.day), (other.month, other.day)) {
                ((Some(m1), Some(d1)), (Some(m2), Some(d2))) if m1 == m2 => {
                    if d1 == d2 { 1.0 } else { 0.7 }
                }
                ((Some(m1), _), (Some(m2), _)) if m1 == m2 => 0.9,
                ((None, _), _) | (_, (None, _)) => 0.8,
                _ => 0.5,
            }
        } else {
            let apart = (self.year - other.year).abs();
            if apart < YEAR_TOLERANCE {
                0.4 * (1.0 - f64::from(apart) / f64::from(YEAR_TOLERANCE))
            } else {
                0.0
            }
        };

        if self.is_exact() && other.is_exact() {
            score
        } else {
            score.min(0.9)
        }
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    /// Chronological order; missing components sort first
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day)
            .cmp(&(other.year, other.month, other.day))
            .then_with(|| (self.qualifier as u8).cmp(&(other.qualifier as u8)))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keyword) = self.qualifier.keyword() {
            write!(f, "{keyword} ")?;
        }
        if let Some(day) = self.day {
            write!(f, "{day} ")?;
        }
        if let Some(month) = self.month {
            // Hand-built dates may carry a month outside 1-12
            match month.checked_sub(1).and_then(|i| MONTHS.get(i as usize)) {
                Some(name) => write!(f, "{name} ")?,
                None => write!(f, "{month} ")?,
            }
        }
        write!(f, "{}", self.year)
    }
}

fn parse_year(word: &str) -> Option<i32> {
    // Dual dating such as "1750/51" keeps the first year
    let year = word.split('/').next()?;
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn parse_month(word: &str) -> Option<u32> {
    let word = word.trim_end_matches('.');
    if word.len() < 3 {
        return None;
    }
    let prefix = word.get(..3)?;
    let position = MONTHS.iter().position(|m| m.eq_ignore_ascii_case(prefix))?;
    let full = chrono::Month::try_from(u8::try_from(position + 1).ok()?).ok()?;
    // Accept "Jan" and "January" but not "Janxyz"
    if word.len() == 3 || full.name().eq_ignore_ascii_case(word) || word.eq_ignore_ascii_case("sept") {
        u32::try_from(position + 1).ok()
    } else {
        None
    }
}
