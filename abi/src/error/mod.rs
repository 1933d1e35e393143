mod conflict;

use chrono::NaiveDate;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

pub use conflict::*;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("invalid date range: {start} to {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("booking conflict")]
    ConflictReservation(BookingConflictInfo),

    #[error("id {0} is already stored")]
    DuplicateId(i64),

    #[error("db error: {0}")]
    DbError(sqlx::Error),
}

impl PartialEq for ReservationError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // sqlx::Error has no PartialEq, so any two db errors compare equal
            (Self::DbError(_), Self::DbError(_)) => true,
            (Self::ConflictReservation(v1), Self::ConflictReservation(v2)) => v1 == v2,
            (
                Self::InvalidRange { start: s1, end: e1 },
                Self::InvalidRange { start: s2, end: e2 },
            ) => s1 == s2 && e1 == e2,
            (Self::DuplicateId(v1), Self::DuplicateId(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl From<sqlx::Error> for ReservationError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(e) => {
                let conflict = e
                    .try_downcast_ref::<PgDatabaseError>()
                    .filter(|err| {
                        err.code() == "23P01"
                            && err.schema() == Some("hotel")
                            && err.table() == Some("bookings")
                    })
                    .map(|err| BookingConflictInfo::from_detail(err.detail().unwrap_or_default()));

                match conflict {
                    Some(info) => Self::ConflictReservation(info),
                    None => Self::DbError(sqlx::Error::Database(e)),
                }
            }
            _ => Self::DbError(e),
        }
    }
}
