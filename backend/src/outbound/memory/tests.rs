//! Behaviour of the in-memory adapter through the driven ports.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::MemoryStore;
use crate::domain::ports::{
    ClientRepository, FacetsQuery, MachineRepository, TicketReportQuery, TicketRepository,
    WorkshopRepositoryError,
};
use crate::domain::{
    ClientId, ClientName, Facets, FilterField, IntakeRequest, MachineDescription, MachineDraft,
    MachineId, NewTicket, SerialNumber, TicketDraft, TicketFilter, TicketStatus, TicketUpdate,
};

#[fixture]
fn store() -> MemoryStore {
    MemoryStore::new()
}

fn name(raw: &str) -> ClientName {
    ClientName::new(raw).expect("valid client name")
}

fn description(brand: Option<&str>, class: Option<&str>, serial: &str) -> MachineDescription {
    MachineDescription::new(
        brand.map(str::to_owned),
        class.map(str::to_owned),
        SerialNumber::new(serial).expect("valid serial"),
    )
}

fn draft(status: Option<&str>, fault: Option<&str>) -> TicketDraft {
    TicketDraft {
        date_received: NaiveDate::from_ymd_opt(2024, 4, 10).expect("valid date"),
        date_completed: None,
        status: status.map(str::to_owned),
        fault: fault.map(str::to_owned),
        notes: None,
    }
}

async fn machine_for(
    store: &MemoryStore,
    client: &str,
    brand: Option<&str>,
    serial: &str,
) -> MachineId {
    let client_id = ClientRepository::resolve(store, &name(client))
        .await
        .expect("client resolves")
        .id;
    MachineRepository::resolve(
        store,
        &MachineDraft::new(client_id, description(brand, None, serial)),
    )
    .await
    .expect("machine resolves")
    .id
}

async fn ticket_for(
    store: &MemoryStore,
    machine: MachineId,
    status: Option<&str>,
    fault: Option<&str>,
) -> crate::domain::TicketId {
    store
        .create(&NewTicket::new(machine, draft(status, fault)))
        .await
        .expect("ticket created")
}

#[rstest]
#[tokio::test]
async fn resolving_a_client_twice_yields_one_id(store: MemoryStore) {
    let first = ClientRepository::resolve(&store, &name("Acme")).await.expect("first");
    let second = ClientRepository::resolve(&store, &name("Acme")).await.expect("second");

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.id, second.id);
}

#[rstest]
#[tokio::test]
async fn machine_brand_is_first_write_wins(store: MemoryStore) {
    let first = machine_for(&store, "Acme", Some("Bosch"), "SN-1").await;
    let second = machine_for(&store, "Acme", Some("Makita"), "SN-1").await;

    assert_eq!(first, second);
    let machines = MachineRepository::list(&store).await.expect("machines list");
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[0].brand.as_deref(), Some("Bosch"));
}

#[rstest]
#[tokio::test]
async fn same_serial_for_another_client_is_another_machine(store: MemoryStore) {
    let acme = machine_for(&store, "Acme", None, "SN-1").await;
    let initech = machine_for(&store, "Initech", None, "SN-1").await;
    assert_ne!(acme, initech);
}

#[rstest]
#[tokio::test]
async fn machine_for_unknown_client_is_rejected(store: MemoryStore) {
    let draft = MachineDraft::new(ClientId::new(404), description(None, None, "SN"));
    let err = MachineRepository::resolve(&store, &draft)
        .await
        .expect_err("owner missing");
    assert_eq!(err, WorkshopRepositoryError::missing_client(404_i64));
}

#[rstest]
#[tokio::test]
async fn report_is_ordered_by_id_descending(store: MemoryStore) {
    let machine = machine_for(&store, "Acme", None, "SN-1").await;
    for _ in 0..4 {
        ticket_for(&store, machine, None, None).await;
    }

    let rows = TicketReportQuery::list(&store, &TicketFilter::default())
        .await
        .expect("report");
    let ids: Vec<i64> = rows.iter().map(|row| row.id.get()).collect();

    assert_eq!(ids.len(), 4);
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
}

#[rstest]
#[tokio::test]
async fn client_filter_is_substring_and_status_filter_is_exact(store: MemoryStore) {
    let acme = machine_for(&store, "Acme", None, "A-1").await;
    let acme_corp = machine_for(&store, "Acme Corp", None, "B-1").await;
    let other = machine_for(&store, "Initech", None, "C-1").await;
    ticket_for(&store, acme, Some("done"), None).await;
    ticket_for(&store, acme_corp, Some("in_progress"), None).await;
    ticket_for(&store, other, Some("done"), None).await;

    let by_client = TicketFilter::default().with(FilterField::Client, Some("Acme".into()));
    let rows = TicketReportQuery::list(&store, &by_client).await.expect("report");
    let clients: Vec<_> = rows.iter().filter_map(|r| r.klient.as_deref()).collect();
    assert_eq!(clients, vec!["Acme Corp", "Acme"]);

    let by_status = TicketFilter::default().with(FilterField::Status, Some("done".into()));
    let rows = TicketReportQuery::list(&store, &by_status).await.expect("report");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.status == "done"));
}

#[rstest]
#[tokio::test]
async fn created_fault_reads_back_through_the_report(store: MemoryStore) {
    let machine = machine_for(&store, "Acme", Some("Bosch"), "SN-1").await;
    let id = ticket_for(&store, machine, None, Some("leak")).await;

    let rows = TicketReportQuery::list(&store, &TicketFilter::default())
        .await
        .expect("report");

    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].usterka.as_deref(), Some("leak"));
    assert_eq!(rows[0].status, TicketStatus::NEW);
    assert_eq!(rows[0].marka.as_deref(), Some("Bosch"));
}

#[rstest]
#[tokio::test]
async fn ticket_for_unknown_machine_is_rejected(store: MemoryStore) {
    let err = store
        .create(&NewTicket::new(MachineId::new(77), draft(None, None)))
        .await
        .expect_err("machine missing");
    assert_eq!(err, WorkshopRepositoryError::missing_machine(77_i64));
}

#[rstest]
#[tokio::test]
async fn update_after_delete_finds_nothing(store: MemoryStore) {
    let machine = machine_for(&store, "Acme", None, "SN-1").await;
    let id = ticket_for(&store, machine, None, None).await;
    let update = TicketUpdate::new(
        Some(TicketStatus::new("done").expect("valid status")),
        None,
        None,
        None,
    )
    .expect("non-empty update");

    assert!(store.delete(id).await.expect("delete"));
    assert!(!store.update(id, &update).await.expect("update"));
    assert!(!store.delete(id).await.expect("second delete"));
}

#[rstest]
#[tokio::test]
async fn dangling_machine_keeps_ticket_with_null_columns(store: MemoryStore) {
    let machine = machine_for(&store, "Acme", Some("Bosch"), "SN-1").await;
    let id = ticket_for(&store, machine, None, None).await;
    store.reassign_machine(id, MachineId::new(999));

    let rows = TicketReportQuery::list(&store, &TicketFilter::default())
        .await
        .expect("report");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].klient, None);
    assert_eq!(rows[0].marka, None);
    assert_eq!(rows[0].sn, None);

    let by_brand = TicketFilter::default().with(FilterField::Brand, Some("b".into()));
    assert!(
        TicketReportQuery::list(&store, &by_brand)
            .await
            .expect("report")
            .is_empty()
    );
}

#[rstest]
#[tokio::test]
async fn intake_resolves_and_creates_in_one_step(store: MemoryStore) {
    let request = IntakeRequest::new(
        name("Acme"),
        description(Some("Bosch"), Some("drill"), "SN-1"),
        draft(None, Some("noise")),
    );

    let first = store.intake(&request).await.expect("intake");
    let second = store.intake(&request).await.expect("second intake");

    assert_eq!(first.client_id, second.client_id);
    assert_eq!(first.machine_id, second.machine_id);
    assert_ne!(first.ticket_id, second.ticket_id);
}

#[rstest]
#[tokio::test]
async fn facets_list_each_brand_once(store: MemoryStore) {
    let first = machine_for(&store, "Acme", Some("Bosch"), "SN-1").await;
    machine_for(&store, "Initech", Some("Bosch"), "SN-2").await;
    machine_for(&store, "Initech", None, "SN-3").await;
    ticket_for(&store, first, None, Some("leak")).await;
    ticket_for(&store, first, None, Some("leak")).await;

    let facets = Facets::from(store.load().await.expect("facets"));

    assert_eq!(facets.marki, vec!["Bosch"]);
    assert_eq!(facets.usterki, vec!["leak"]);
    assert_eq!(facets.klienci, vec!["Acme", "Initech"]);
    assert_eq!(facets.numery_seryjne, vec!["SN-1", "SN-2", "SN-3"]);
    assert!(facets.klasy.is_empty());
}
