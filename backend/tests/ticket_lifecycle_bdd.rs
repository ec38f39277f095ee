//! Behavioural tests for the repair ticket lifecycle.
//!
//! Scenarios in `tests/features/ticket_lifecycle.feature` drive the ticket
//! and reporting services over the in-memory store. Each scenario owns one
//! Tokio runtime so the async services can be driven from synchronous steps.

use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::sync::Arc;
use tokio::runtime::Runtime;

use workshop::domain::ports::{ReportQuery, TicketCommand};
use workshop::domain::{
    ClientName, Error, ErrorCode, FilterField, IntakeReceipt, IntakeRequest, MachineDescription,
    ReportingService, SerialNumber, TicketDraft, TicketFilter, TicketId, TicketReport,
    TicketService, TicketStatus, TicketUpdate,
};
use workshop::outbound::memory::MemoryStore;

struct TicketLifecycleWorld {
    runtime: Runtime,
    tickets: TicketService<MemoryStore>,
    reports: ReportingService<MemoryStore, MemoryStore>,
    receipt: Option<IntakeReceipt>,
    last_error: Option<Error>,
    last_report: Vec<TicketReport>,
}

impl TicketLifecycleWorld {
    fn ticket_id(&self) -> TicketId {
        self.receipt.expect("ticket should be taken in").ticket_id
    }
}

#[fixture]
fn world() -> TicketLifecycleWorld {
    let store = Arc::new(MemoryStore::new());
    TicketLifecycleWorld {
        runtime: Runtime::new().expect("runtime should start"),
        tickets: TicketService::new(store.clone()),
        reports: ReportingService::new(store.clone(), store),
        receipt: None,
        last_error: None,
        last_report: Vec::new(),
    }
}

fn intake_request() -> IntakeRequest {
    IntakeRequest::new(
        ClientName::new("Acme").expect("name"),
        MachineDescription::new(
            Some("Bosch".into()),
            None,
            SerialNumber::new("SN-1").expect("serial"),
        ),
        TicketDraft {
            date_received: NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"),
            date_completed: None,
            status: None,
            fault: Some("leak".into()),
            notes: None,
        },
    )
}

#[given("a ticket taken in for a client's machine")]
fn a_ticket_taken_in(world: &mut TicketLifecycleWorld) {
    let receipt = world
        .runtime
        .block_on(world.tickets.intake(intake_request()))
        .expect("intake should succeed");
    world.receipt = Some(receipt);
}

#[when("the ticket is marked done")]
fn the_ticket_is_marked_done(world: &mut TicketLifecycleWorld) {
    let id = world.ticket_id();
    let update = TicketUpdate::new(
        Some(TicketStatus::new("done").expect("status")),
        Some(NaiveDate::from_ymd_opt(2024, 3, 9)),
        None,
        None,
    )
    .expect("update");
    let result = world.runtime.block_on(world.tickets.update(id, update));
    world.last_error = result.err();
}

#[when("the ticket is deleted")]
fn the_ticket_is_deleted(world: &mut TicketLifecycleWorld) {
    let id = world.ticket_id();
    world
        .runtime
        .block_on(world.tickets.delete(id))
        .expect("delete should succeed");
}

#[when("the ticket is deleted twice")]
fn the_ticket_is_deleted_twice(world: &mut TicketLifecycleWorld) {
    the_ticket_is_deleted(world);
    let id = world.ticket_id();
    let second = world.runtime.block_on(world.tickets.delete(id));
    world.last_error = second.err();
}

#[when("the report is filtered to done tickets")]
fn the_report_is_filtered_to_done_tickets(world: &mut TicketLifecycleWorld) {
    let filter = TicketFilter::default().with(FilterField::Status, Some("done".into()));
    world.last_report = world
        .runtime
        .block_on(world.reports.list_tickets(filter))
        .expect("report should load");
}

#[then("the report shows the completed ticket with its client")]
fn the_report_shows_the_completed_ticket(world: &mut TicketLifecycleWorld) {
    assert!(
        world.last_error.is_none(),
        "unexpected error: {:?}",
        world.last_error
    );
    let [row] = world.last_report.as_slice() else {
        panic!("expected one row, got {:?}", world.last_report);
    };
    assert_eq!(row.id, world.ticket_id());
    assert_eq!(row.klient.as_deref(), Some("Acme"));
    assert_eq!(row.data_zakonczenia, NaiveDate::from_ymd_opt(2024, 3, 9));
    assert_eq!(row.usterka.as_deref(), Some("leak"));
}

#[then("the second delete is not found")]
fn the_second_delete_is_not_found(world: &mut TicketLifecycleWorld) {
    let err = world.last_error.as_ref().expect("second delete should fail");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[then("the update is not found")]
fn the_update_is_not_found(world: &mut TicketLifecycleWorld) {
    let err = world.last_error.as_ref().expect("update should fail");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[scenario(
    path = "tests/features/ticket_lifecycle.feature",
    name = "Completed ticket appears in the done report"
)]
fn completed_ticket_appears_in_done_report(world: TicketLifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/ticket_lifecycle.feature",
    name = "Deleting a ticket twice reports not found"
)]
fn deleting_twice_reports_not_found(world: TicketLifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/ticket_lifecycle.feature",
    name = "Updating a deleted ticket reports not found"
)]
fn updating_a_deleted_ticket_reports_not_found(world: TicketLifecycleWorld) {
    drop(world);
}
