mod memory;
mod pg;

use std::sync::Arc;

use abi::{Booking, Customer, ReservationError, Room};
use async_trait::async_trait;

pub use memory::InMemoryRepository;
pub use pg::PgRepository;

#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// every stored entity, ascending by id
    async fn get_all(&self) -> Result<Vec<T>, ReservationError>;
}

#[async_trait]
pub trait AddRepository<T>: Repository<T> {
    /// persist an entity and return it as stored, with its id assigned
    async fn add(&self, entity: T) -> Result<T, ReservationError>;
}

/// Anything a store can key by an integer id. An id of 0 means "not assigned yet".
pub trait Entity {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

impl Entity for Room {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Customer {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Booking {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[async_trait]
impl<T, R> Repository<T> for Arc<R>
where
    T: Send + 'static,
    R: Repository<T> + ?Sized,
{
    async fn get_all(&self) -> Result<Vec<T>, ReservationError> {
        Repository::<T>::get_all(&**self).await
    }
}

#[async_trait]
impl<T, R> AddRepository<T> for Arc<R>
where
    T: Send + 'static,
    R: AddRepository<T> + ?Sized,
{
    async fn add(&self, entity: T) -> Result<T, ReservationError> {
        AddRepository::<T>::add(&**self, entity).await
    }
}
