pub mod hotel;
pub mod ticket;

pub use hotel::{Hotel, HotelWithRooms, Room};
pub use ticket::{Ticket, TicketStatus, TicketType};
