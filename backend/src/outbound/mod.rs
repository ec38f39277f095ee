//! Outbound adapters implementing the workshop driven ports.
//!
//! - **persistence**: PostgreSQL via Diesel, `diesel-async` and bb8.
//! - **memory**: process-local tables for tests and database-less runs.
//!
//! Adapters translate between storage rows and domain types; the rules live
//! in the domain services.

pub mod memory;
pub mod persistence;
