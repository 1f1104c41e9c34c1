//! `DD.MM.YYYY` dates as used by every item record.
//!
//! Dates are compared as day numbers (days since 1970-01-01), which is also
//! what the ledger clock gives after dividing by a day's worth of seconds.

use crate::types::Error;
use soroban_sdk::{Env, String};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const DATE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CivilDate {
    pub day: u32,
    pub month: u32,
    pub year: i64,
}

impl CivilDate {
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }
}

/// Parse a `DD.MM.YYYY` string, rejecting impossible calendar dates
pub fn parse(date: &String) -> Result<CivilDate, Error> {
    if date.len() as usize != DATE_LEN {
        return Err(Error::InvalidDate);
    }

    let mut buf = [0u8; DATE_LEN];
    date.copy_into_slice(&mut buf);

    if buf[2] != b'.' || buf[5] != b'.' {
        return Err(Error::InvalidDate);
    }

    let day = digits(&buf[0..2])?;
    let month = digits(&buf[3..5])?;
    let year = digits(&buf[6..10])?;

    if month == 0 || month > 12 || day == 0 || day > days_in_month(year as i64, month) {
        return Err(Error::InvalidDate);
    }

    Ok(CivilDate {
        day,
        month,
        year: year as i64,
    })
}

/// Day number of a stored date, or `None` when it does not parse
pub fn day_number(date: &String) -> Option<i64> {
    parse(date).ok().map(|d| d.day_number())
}

/// Current day number according to the ledger clock
pub fn today(env: &Env) -> i64 {
    (env.ledger().timestamp() / SECONDS_PER_DAY) as i64
}

fn digits(bytes: &[u8]) -> Result<u32, Error> {
    let mut value = 0u32;
    for b in bytes {
        if !b.is_ascii_digit() {
            return Err(Error::InvalidDate);
        }
        value = value * 10 + (b - b'0') as u32;
    }
    Ok(value)
}

fn is_leap(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Proleptic Gregorian calendar, epoch 1970-01-01 = 0
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
