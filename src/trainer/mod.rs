//! Interview trainer: question bank, persisted favorites, drill session.

pub mod favorites;
pub mod questions;
pub mod session;
