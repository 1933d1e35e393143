use std::sync::Arc;

use abi::{days_between, Booking, BookingBuilder, Customer, Room, NO_ROOM_AVAILABLE};
use chrono::{Duration, NaiveDate};
use reservation::{
    seed_demo, BookingManager, FixedClock, InMemoryRepository, Repository, Rsvp,
};

type Manager = BookingManager<
    Arc<InMemoryRepository<Room>>,
    Arc<InMemoryRepository<Booking>>,
    FixedClock,
>;

fn today() -> NaiveDate {
    "2026-10-18".parse().unwrap()
}

fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

async fn demo_hotel() -> (Manager, Arc<InMemoryRepository<Booking>>) {
    let rooms = Arc::new(InMemoryRepository::<Room>::new());
    let customers = InMemoryRepository::<Customer>::new();
    let bookings = Arc::new(InMemoryRepository::<Booking>::new());
    seed_demo(&*rooms, &customers, &*bookings, today())
        .await
        .unwrap();

    let manager = BookingManager::with_clock(rooms, bookings.clone(), FixedClock(today()));
    (manager, bookings)
}

fn rooms(ids: &[i64]) -> Arc<InMemoryRepository<Room>> {
    Arc::new(InMemoryRepository::with_entities(
        ids.iter().map(|id| Room::new(*id, format!("room {id}"))),
    ))
}

fn booking(room_id: i64, start: i64, end: i64) -> Booking {
    BookingBuilder::default()
        .customer_id(1)
        .room_id(room_id)
        .start_date(day(start))
        .end_date(day(end))
        .is_active(true)
        .build()
        .unwrap()
}

#[tokio::test]
async fn demo_hotel_should_have_a_room_tomorrow() {
    let (manager, _) = demo_hotel().await;
    let room = manager.find_available_room(day(1), day(2)).await.unwrap();
    assert!(matches!(room, Some(1..=3)));
}

#[tokio::test]
async fn demo_hotel_should_be_full_on_day_eight() {
    let (manager, _) = demo_hotel().await;
    let room = manager.find_available_room(day(8), day(8)).await.unwrap();
    assert_eq!(room, None);
    assert_eq!(room.unwrap_or(NO_ROOM_AVAILABLE), -1);
}

#[tokio::test]
async fn demo_hotel_booking_should_be_added() {
    let (manager, bookings) = demo_hotel().await;

    let candidate = Booking::new_pending(1, 3, day(1), day(3));
    assert!(manager.create_booking(candidate).await.unwrap());
    assert_eq!(bookings.len(), 5);
}

#[tokio::test]
async fn demo_hotel_occupied_room_should_not_be_added() {
    let (manager, bookings) = demo_hotel().await;

    let candidate = Booking::new_pending(1, 1, day(1), day(15));
    assert!(!manager.create_booking(candidate).await.unwrap());
    assert_eq!(bookings.len(), 4);
}

#[tokio::test]
async fn demo_hotel_should_report_occupied_dates() {
    let (manager, _) = demo_hotel().await;
    let dates = manager
        .get_fully_occupied_dates(day(10), day(15))
        .await
        .unwrap();
    assert_eq!(dates, days_between(day(10), day(15)).collect::<Vec<_>>());
}

#[tokio::test]
async fn occupancy_should_need_all_three_rooms() {
    let bookings = Arc::new(InMemoryRepository::with_entities([booking(1, 10, 20)]));
    let manager = BookingManager::with_clock(rooms(&[1, 2, 3]), bookings.clone(), FixedClock(today()));

    assert!(manager
        .get_fully_occupied_dates(day(10), day(20))
        .await
        .unwrap()
        .is_empty());

    let mut second = booking(2, 10, 20);
    second.id = 2;
    let mut third = booking(3, 10, 20);
    third.id = 3;
    let bookings = Arc::new(InMemoryRepository::with_entities([booking(1, 10, 20), second, third]));
    let manager = BookingManager::with_clock(rooms(&[1, 2, 3]), bookings, FixedClock(today()));

    let dates = manager
        .get_fully_occupied_dates(day(10), day(20))
        .await
        .unwrap();
    assert_eq!(dates.len(), 11);
    assert_eq!(dates, days_between(day(10), day(20)).collect::<Vec<_>>());
}

#[tokio::test]
async fn booking_on_empty_store_should_be_stored_active() {
    let bookings = Arc::new(InMemoryRepository::<Booking>::new());
    let manager = BookingManager::with_clock(rooms(&[1, 2, 3]), bookings.clone(), FixedClock(today()));

    let candidate = Booking::new_pending(1, 3, day(1), day(2));
    assert!(manager.create_booking(candidate).await.unwrap());

    let stored = Repository::<Booking>::get_all(bookings.as_ref()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].room_id, 3);
    assert!(stored[0].is_active);

    // the same room is now taken for an overlapping stay, but another one is offered
    let clash = Booking::new_pending(2, 3, day(2), day(4));
    assert!(!manager.create_booking(clash).await.unwrap());
    assert_eq!(manager.find_available_room(day(2), day(4)).await.unwrap(), Some(1));
}
