//! Downloadable resume templates.

pub mod catalog;
pub mod handlers;
