//! Birth-count data loading and aggregation
//!
//! Reads daily birth totals from a CSV file with the header
//! `year,month,date_of_month,day_of_week,births` (US SSA format) and
//! aggregates them into the shapes the distribution and plots need.
//! Leap-year rows are dropped so day-of-year stays in 1-365.

use crate::distribution::DAYS_IN_YEAR;
use crate::error::{BirthdayError, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::Path;

/// One CSV row of daily birth counts
#[derive(Debug, Clone, Deserialize)]
pub struct BirthRecord {
    pub year: i32,
    pub month: u32,
    #[serde(rename = "date_of_month")]
    pub day: u32,
    pub births: u64,
}

impl BirthRecord {
    fn date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            BirthdayError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )
    }
}

/// Load all birth records from a CSV file
pub fn load_birth_records(path: impl AsRef<Path>) -> Result<Vec<BirthRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<BirthRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Total births per day-of-year, leap years excluded
pub fn day_of_year_totals(records: &[BirthRecord]) -> Result<[u64; DAYS_IN_YEAR]> {
    let mut totals = [0u64; DAYS_IN_YEAR];
    for record in records {
        let date = record.date()?;
        if date.leap_year() {
            continue;
        }
        totals[(date.ordinal() - 1) as usize] += record.births;
    }
    Ok(totals)
}

/// Total births per (month, day-of-month) cell, leap years excluded
///
/// Indexed as `grid[month - 1][day - 1]`; cells for days that do not
/// exist (for example Feb 30) stay zero.
pub fn month_day_totals(records: &[BirthRecord]) -> Result<[[u64; 31]; 12]> {
    let mut grid = [[0u64; 31]; 12];
    for record in records {
        let date = record.date()?;
        if date.leap_year() {
            continue;
        }
        grid[(record.month - 1) as usize][(record.day - 1) as usize] += record.births;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_aggregate() {
        let file = write_csv(
            "year,month,date_of_month,day_of_week,births\n\
             2001,1,1,1,100\n\
             2001,1,2,2,150\n\
             2002,1,1,3,50\n",
        );
        let records = load_birth_records(file.path()).unwrap();

        assert_eq!(records.len(), 3);

        let totals = day_of_year_totals(&records).unwrap();
        assert_eq!(totals[0], 150); // Jan 1 across both years
        assert_eq!(totals[1], 150); // Jan 2
        assert_eq!(totals[2], 0);

        let grid = month_day_totals(&records).unwrap();
        assert_eq!(grid[0][0], 150);
        assert_eq!(grid[0][1], 150);
    }

    #[test]
    fn test_leap_years_dropped() {
        let file = write_csv(
            "year,month,date_of_month,day_of_week,births\n\
             2000,3,1,1,999\n\
             2001,3,1,2,10\n",
        );
        let records = load_birth_records(file.path()).unwrap();

        let totals = day_of_year_totals(&records).unwrap();
        // March 1 is day 60 in a non-leap year; only the 2001 row counts
        assert_eq!(totals[59], 10);
        assert_eq!(totals.iter().sum::<u64>(), 10);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let records = vec![BirthRecord {
            year: 2001,
            month: 2,
            day: 30,
            births: 1,
        }];
        let err = day_of_year_totals(&records).unwrap_err();
        assert!(matches!(
            err,
            BirthdayError::InvalidDate {
                year: 2001,
                month: 2,
                day: 30
            }
        ));
    }
}
