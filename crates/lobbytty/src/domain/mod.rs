//! Domain model: sessions, filters, fixtures, and input primitives.

pub mod filter;
pub mod fixture;
pub mod input;
pub mod session;
