use abi::{validate_future_range, validate_range, Booking, ReservationError, Room, RoomId};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::{
    find_free_room, fully_occupied_dates, AddRepository, BookingManager, Clock, Occupancy,
    Repository, Rsvp,
};

#[async_trait]
impl<R, B, C> Rsvp for BookingManager<R, B, C>
where
    R: Repository<Room>,
    B: AddRepository<Booking>,
    C: Clock,
{
    #[instrument(skip(self))]
    async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, ReservationError> {
        validate_future_range(start, end, self.clock.today())?;

        let (rooms, bookings) = self.snapshot().await?;
        let room = find_free_room(&rooms, &bookings, start, end);
        debug!(?room, "room search finished");
        Ok(room)
    }

    #[instrument(skip_all, fields(room_id = booking.room_id, start = %booking.start_date, end = %booking.end_date))]
    async fn create_booking(&self, mut booking: Booking) -> Result<bool, ReservationError> {
        validate_future_range(booking.start_date, booking.end_date, self.clock.today())?;

        let (rooms, bookings) = self.snapshot().await?;
        if !rooms.iter().any(|r| r.id == booking.room_id) {
            warn!("requested room does not exist");
            return Ok(false);
        }

        let occupancy = Occupancy::new(&bookings);
        if !occupancy.is_room_free(booking.room_id, booking.start_date, booking.end_date) {
            warn!("requested room is already booked");
            return Ok(false);
        }

        booking.is_active = true;
        let booking = self.bookings.add(booking).await?;
        info!(booking_id = booking.id, "booking created");
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn get_fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, ReservationError> {
        validate_range(start, end)?;

        let (rooms, bookings) = self.snapshot().await?;
        Ok(fully_occupied_dates(&rooms, &bookings, start, end))
    }
}

impl<R, B, C> BookingManager<R, B, C>
where
    R: Repository<Room>,
    B: AddRepository<Booking>,
    C: Clock,
{
    async fn snapshot(&self) -> Result<(Vec<Room>, Vec<Booking>), ReservationError> {
        let rooms = self.rooms.get_all().await?;
        let bookings = self.bookings.get_all().await?;
        debug!(rooms = rooms.len(), bookings = bookings.len(), "loaded snapshot");
        Ok((rooms, bookings))
    }
}
