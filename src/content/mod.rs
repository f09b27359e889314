mod clinic;
mod doctor;
mod resources;
mod services;
mod testimonials;

pub use clinic::{Clinic, FooterLinks, clinic, footer_links};
pub use doctor::{Doctor, doctor};
pub use resources::{Resource, resources};
pub use services::{Service, services};
pub use testimonials::{Testimonial, testimonials};
