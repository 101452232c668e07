//! Booking domain entities.

pub mod line;
pub mod model;
pub mod request;
pub mod status;

pub use line::BookingRoomLine;
pub use model::{Booking, CreateBooking};
pub use request::{RoomRequest, RoomSelection};
pub use status::BookingStatus;
