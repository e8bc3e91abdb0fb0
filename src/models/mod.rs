pub mod booking;
pub mod customer;
pub mod event;
pub mod template;
pub mod venue;

pub use booking::{Booking, BookingLineItem, PaymentStatus};
pub use customer::Customer;
pub use event::{Event, EventTicket};
pub use template::{EventTemplate, EventTemplateTicket};
pub use venue::{Region, Venue};
