//! Contact form submissions and the admin listing.

pub mod handlers;
pub mod repository;
