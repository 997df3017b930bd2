//! Resume analysis: the heuristic fit scorer, its tables, and the pluggable
//! analyzer backends served by `POST /api/v1/resumes/analyze`.

pub mod analyzer;
pub mod catalog;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod scorer;
pub mod signals;
