//! Pure availability checks over a snapshot of rooms and bookings.
//!
//! Callers validate the date range first; these functions take it as given.

use std::collections::HashMap;

use abi::{days_between, Booking, Room, RoomId};
use chrono::NaiveDate;

/// Active bookings of a snapshot, indexed by room.
#[derive(Debug, Default)]
pub struct Occupancy<'a> {
    by_room: HashMap<RoomId, Vec<&'a Booking>>,
}

impl<'a> Occupancy<'a> {
    pub fn new(bookings: &'a [Booking]) -> Self {
        let mut by_room: HashMap<RoomId, Vec<&'a Booking>> = HashMap::new();
        for booking in bookings.iter().filter(|b| b.is_active) {
            by_room.entry(booking.room_id).or_default().push(booking);
        }
        Self { by_room }
    }

    fn active(&self, room_id: RoomId) -> &[&'a Booking] {
        self.by_room.get(&room_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// No active booking on `room_id` overlaps `[start, end]`.
    pub fn is_room_free(&self, room_id: RoomId, start: NaiveDate, end: NaiveDate) -> bool {
        !self.active(room_id).iter().any(|b| b.overlaps(start, end))
    }

    /// Some active booking on `room_id` covers `date`.
    pub fn is_room_taken_on(&self, room_id: RoomId, date: NaiveDate) -> bool {
        self.active(room_id).iter().any(|b| b.covers(date))
    }
}

/// Lowest room id free for the whole of `[start, end]`.
pub fn find_free_room(
    rooms: &[Room],
    bookings: &[Booking],
    start: NaiveDate,
    end: NaiveDate,
) -> Option<RoomId> {
    let occupancy = Occupancy::new(bookings);
    let mut ids: Vec<RoomId> = rooms.iter().map(|r| r.id).collect();
    ids.sort_unstable();

    ids.into_iter()
        .find(|id| occupancy.is_room_free(*id, start, end))
}

/// Days of `[start, end]` on which every room is taken, ascending.
///
/// With no rooms at all nothing counts as occupied.
pub fn fully_occupied_dates(
    rooms: &[Room],
    bookings: &[Booking],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }

    let occupancy = Occupancy::new(bookings);
    days_between(start, end)
        .filter(|day| rooms.iter().all(|r| occupancy.is_room_taken_on(r.id, *day)))
        .collect()
}
