mod config;
mod error;
mod types;

pub use config::*;
pub use error::*;
pub use types::*;

pub type RoomId = i64;
pub type BookingId = i64;
pub type CustomerId = i64;

/// Numeric stand-in for "no room available", for callers that cannot carry an `Option`.
pub const NO_ROOM_AVAILABLE: RoomId = -1;

pub trait Validator {
    fn validate(&self) -> Result<(), ReservationError>;
}
