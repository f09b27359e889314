//! TUI section implementations.

pub mod about;
pub mod contact;
pub mod home;
pub mod resources;
pub mod services;
pub mod testimonials;

pub use about::draw_about;
pub use contact::{ContactState, draw_contact};
pub use home::draw_home;
pub use resources::draw_resources;
pub use services::draw_services;
pub use testimonials::{TestimonialsState, draw_testimonials};
