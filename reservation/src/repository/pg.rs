use abi::{Booking, Customer, DbConfig, ReservationError, Room};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use super::{AddRepository, Repository};

/// PostgreSQL store. The `bookings_no_overlap` exclusion constraint keeps
/// active bookings of a room disjoint even when writers race, and surfaces
/// as [`ReservationError::ConflictReservation`].
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn from_config(config: &DbConfig) -> Result<Self, ReservationError> {
        let pool = PgPoolOptions::default()
            .max_connections(config.max_connections)
            .connect(&config.to_url())
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), ReservationError> {
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }
}

#[async_trait]
impl Repository<Room> for PgRepository {
    async fn get_all(&self) -> Result<Vec<Room>, ReservationError> {
        let rooms = sqlx::query_as::<_, Room>("SELECT id, description FROM hotel.rooms ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rooms)
    }
}

#[async_trait]
impl AddRepository<Room> for PgRepository {
    async fn add(&self, room: Room) -> Result<Room, ReservationError> {
        let room = sqlx::query_as::<_, Room>(
            "INSERT INTO hotel.rooms (id, description) VALUES ($1, $2) RETURNING id, description",
        )
        .bind(room.id)
        .bind(room.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }
}

#[async_trait]
impl Repository<Customer> for PgRepository {
    async fn get_all(&self) -> Result<Vec<Customer>, ReservationError> {
        let customers = sqlx::query_as::<_, Customer>("SELECT id, name, email FROM hotel.customers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(customers)
    }
}

#[async_trait]
impl AddRepository<Customer> for PgRepository {
    async fn add(&self, customer: Customer) -> Result<Customer, ReservationError> {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO hotel.customers (id, name, email) VALUES ($1, $2, $3) RETURNING id, name, email",
        )
        .bind(customer.id)
        .bind(customer.name)
        .bind(customer.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }
}

#[async_trait]
impl Repository<Booking> for PgRepository {
    async fn get_all(&self) -> Result<Vec<Booking>, ReservationError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT id, customer_id, room_id, start_date, end_date, is_active FROM hotel.bookings ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }
}

#[async_trait]
impl AddRepository<Booking> for PgRepository {
    /// Booking ids come from the `bookings.id` sequence; any id on the input is ignored.
    async fn add(&self, booking: Booking) -> Result<Booking, ReservationError> {
        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO hotel.bookings (customer_id, room_id, start_date, end_date, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, customer_id, room_id, start_date, end_date, is_active",
        )
        .bind(booking.customer_id)
        .bind(booking.room_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(booking)
    }
}
