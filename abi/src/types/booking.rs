use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{overlaps, validate_range, BookingId, CustomerId, ReservationError, RoomId, Validator};

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize, sqlx::FromRow)]
#[builder(setter(into))]
pub struct Booking {
    #[builder(default)]
    pub id: BookingId,
    #[builder(default)]
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[builder(default)]
    pub is_active: bool,
}

impl Booking {
    /// A booking that has not been admitted yet: no id, not active.
    pub fn new_pending(
        customer_id: CustomerId,
        room_id: RoomId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            customer_id,
            room_id,
            start_date,
            end_date,
            is_active: false,
        }
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        overlaps(self.start_date, self.end_date, start, end)
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Validator for Booking {
    fn validate(&self) -> Result<(), ReservationError> {
        validate_range(self.start_date, self.end_date)
    }
}
