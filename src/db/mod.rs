pub mod bookings;
pub mod customers;
pub mod events;
pub mod templates;
