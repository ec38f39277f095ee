//! PostgreSQL adapters for the workshop ports, built on Diesel,
//! `diesel-async` and a bb8 pool.
//!
//! Row structs and table definitions stay private to this module; adapters
//! only hand domain types across the port boundary.

mod diesel_client_repository;
mod diesel_facets_query;
pub(crate) mod diesel_helpers;
mod diesel_machine_repository;
mod diesel_ticket_report_query;
mod diesel_ticket_repository;
mod models;
mod pool;
mod resolution;
mod schema;
mod schema_manager;

pub use diesel_client_repository::DieselClientRepository;
pub use diesel_facets_query::DieselFacetsQuery;
pub use diesel_machine_repository::DieselMachineRepository;
pub use diesel_ticket_report_query::DieselTicketReportQuery;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use schema_manager::{MIGRATIONS, SchemaError, ensure_schema};
