//! Page Components

mod contact;
mod home;
mod pricing;
mod testimonials;

pub use home::HomePage;
