use abi::{Booking, Customer, ReservationError, Room};
use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::AddRepository;

pub fn demo_rooms() -> Vec<Room> {
    vec![Room::new(1, "A"), Room::new(2, "B"), Room::new(3, "C")]
}

pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "John Smith", "js@gmail.com"),
        Customer::new(2, "Jane Doe", "jd@gmail.com"),
    ]
}

/// Every demo room is taken from `today + 8` through `today + 20`.
pub fn demo_bookings(today: NaiveDate) -> Vec<Booking> {
    let day = |offset: i64| today + Duration::days(offset);
    [(1, 1, 8, 20), (2, 2, 8, 14), (1, 2, 15, 20), (2, 3, 8, 20)]
        .into_iter()
        .map(|(customer_id, room_id, start, end)| {
            let mut booking = Booking::new_pending(customer_id, room_id, day(start), day(end));
            booking.is_active = true;
            booking
        })
        .collect()
}

/// Fill empty stores with the demo hotel, dated relative to `today`.
pub async fn seed_demo<R, C, B>(
    rooms: &R,
    customers: &C,
    bookings: &B,
    today: NaiveDate,
) -> Result<(), ReservationError>
where
    R: AddRepository<Room>,
    C: AddRepository<Customer>,
    B: AddRepository<Booking>,
{
    for room in demo_rooms() {
        rooms.add(room).await?;
    }
    for customer in demo_customers() {
        customers.add(customer).await?;
    }
    let demo = demo_bookings(today);
    let count = demo.len();
    for booking in demo {
        bookings.add(booking).await?;
    }

    info!(%today, bookings = count, "seeded demo hotel");
    Ok(())
}
