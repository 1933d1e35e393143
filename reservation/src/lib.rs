mod availability;
mod clock;
mod manager;
pub mod repository;
mod seed;

use abi::{Booking, ReservationError, Room, RoomId};
use async_trait::async_trait;
use chrono::NaiveDate;

pub use availability::*;
pub use clock::*;
pub use repository::{AddRepository, Entity, InMemoryRepository, PgRepository, Repository};
pub use seed::*;

/// Availability engine over a room store, a booking store and a clock.
#[derive(Debug)]
pub struct BookingManager<R, B, C = SystemClock> {
    rooms: R,
    bookings: B,
    clock: C,
}

#[async_trait]
pub trait Rsvp {
    /// lowest-id room with no active booking overlapping `[start, end]`, `None` if every room is taken
    async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, ReservationError>;
    /// admit a booking for the room it names; `false` if that room is taken or unknown
    async fn create_booking(&self, booking: Booking) -> Result<bool, ReservationError>;
    /// days in `[start, end]` on which every room has an active booking
    async fn get_fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, ReservationError>;
}

impl<R, B> BookingManager<R, B>
where
    R: Repository<Room>,
    B: AddRepository<Booking>,
{
    pub fn new(rooms: R, bookings: B) -> Self {
        Self::with_clock(rooms, bookings, SystemClock)
    }
}

impl<R, B, C> BookingManager<R, B, C>
where
    R: Repository<Room>,
    B: AddRepository<Booking>,
    C: Clock,
{
    pub fn with_clock(rooms: R, bookings: B, clock: C) -> Self {
        Self {
            rooms,
            bookings,
            clock,
        }
    }
}
