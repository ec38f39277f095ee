//! Workshop domain: value types, ports and the services behind the use cases.
//!
//! Nothing in here depends on actix or Diesel. Inbound adapters validate
//! payloads into these types; outbound adapters implement [`ports`].
//!
//! Public surface:
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - Client/Machine/Ticket value types and the ids that key them.
//! - TicketReport, TicketFilter: the flat reporting view and its predicates.
//! - Facets: distinct values for filter pickers.
//! - EntityResolverService, TicketService, ReportingService.

pub mod client;
pub mod entity_resolver;
pub mod error;
pub mod facets;
pub mod machine;
pub mod ports;
pub mod report;
pub mod reporting_service;
mod text;
pub mod ticket;
pub mod ticket_service;
pub mod trace_id;

pub use self::client::{Client, ClientId, ClientName, ClientValidationError};
pub use self::entity_resolver::EntityResolverService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::facets::{FacetSource, Facets, distinct_values};
pub use self::machine::{
    Machine, MachineDescription, MachineDraft, MachineId, MachineValidationError, SerialNumber,
};
pub use self::report::{FilterClause, FilterField, FilterOperator, TicketFilter, TicketReport};
pub use self::reporting_service::ReportingService;
pub use self::ticket::{
    IntakeReceipt, IntakeRequest, NewTicket, Ticket, TicketDetails, TicketDraft, TicketId,
    TicketStatus, TicketUpdate, TicketValidationError,
};
pub use self::ticket_service::TicketService;
pub use self::trace_id::TraceId;
