//! Hexagonal boundary of the workshop domain.
//!
//! Driven ports (`*Repository`, `*Query` with a `WorkshopRepositoryError`) are
//! implemented by outbound adapters. Driving ports (`EntityResolution`,
//! `TicketCommand`, `ReportQuery`) return [`crate::domain::Error`] and are what
//! inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod client_repository;
mod entity_resolution;
mod facets_query;
mod machine_repository;
mod report_query;
mod repository_error;
mod ticket_command;
mod ticket_report_query;
mod ticket_repository;

pub use client_repository::ClientRepository;
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use entity_resolution::EntityResolution;
#[cfg(test)]
pub use entity_resolution::MockEntityResolution;
pub use facets_query::FacetsQuery;
#[cfg(test)]
pub use facets_query::MockFacetsQuery;
pub use machine_repository::MachineRepository;
#[cfg(test)]
pub use machine_repository::MockMachineRepository;
#[cfg(test)]
pub use report_query::MockReportQuery;
pub use report_query::ReportQuery;
pub use repository_error::{Resolution, WorkshopRepositoryError};
#[cfg(test)]
pub use ticket_command::MockTicketCommand;
pub use ticket_command::TicketCommand;
#[cfg(test)]
pub use ticket_report_query::MockTicketReportQuery;
pub use ticket_report_query::TicketReportQuery;
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::TicketRepository;
