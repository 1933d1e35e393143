// Detail text postgres attaches to an exclusion violation on hotel.bookings:
// "Key (room_id, daterange(start_date, end_date, '[]'::text))=(1, [2026-10-25,2026-10-28)) conflicts with existing key (room_id, daterange(start_date, end_date, '[]'::text))=(1, [2026-10-20,2026-10-31))."
// Postgres prints the canonical half-open form, so the upper bound is one day past the last booked day.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::{convert::Infallible, str::FromStr};

use crate::RoomId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingConflictInfo {
    Parsed(BookingConflict),
    UnParsed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConflict {
    pub new: BookingWindow,
    pub old: BookingWindow,
}

/// Room and inclusive day range of one side of a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWindow {
    pub room_id: RoomId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BookingConflictInfo {
    pub fn from_detail(s: &str) -> Self {
        match s.parse() {
            Ok(conflict) => Self::Parsed(conflict),
            Err(_) => Self::UnParsed(s.to_string()),
        }
    }
}

impl FromStr for BookingConflictInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_detail(s))
    }
}

impl FromStr for BookingConflict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(
            r"\)=\((?P<room>-?\d+),\s*\[(?P<start>\d{4}-\d{2}-\d{2}),(?P<end>\d{4}-\d{2}-\d{2})\)\)",
        )
        .map_err(|_| ())?;

        let mut windows = re
            .captures_iter(s)
            .map(|cap| BookingWindow::from_canonical(&cap["room"], &cap["start"], &cap["end"]))
            .collect::<Result<Vec<_>, _>>()?;

        if windows.len() != 2 {
            return Err(());
        }

        let old = windows.pop().ok_or(())?;
        let new = windows.pop().ok_or(())?;
        Ok(Self { new, old })
    }
}

impl BookingWindow {
    fn from_canonical(room: &str, start: &str, upper: &str) -> Result<Self, ()> {
        let room_id = room.parse().map_err(|_| ())?;
        let start = parse_date(start)?;
        let end = parse_date(upper)? - Duration::days(1);

        Ok(Self {
            room_id,
            start,
            end,
        })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ()> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ())
}
