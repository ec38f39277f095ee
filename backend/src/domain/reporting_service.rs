//! Read side: the filtered ticket report and the facet lists.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{FacetsQuery, ReportQuery, TicketReportQuery};
use crate::domain::{Error, Facets, TicketFilter, TicketReport};

#[derive(Clone)]
pub struct ReportingService<R, F> {
    reports: Arc<R>,
    facets: Arc<F>,
}

impl<R, F> ReportingService<R, F> {
    pub fn new(reports: Arc<R>, facets: Arc<F>) -> Self {
        Self { reports, facets }
    }
}

#[async_trait]
impl<R, F> ReportQuery for ReportingService<R, F>
where
    R: TicketReportQuery,
    F: FacetsQuery,
{
    /// Rows are returned newest ticket first.
    async fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<TicketReport>, Error> {
        let mut rows = self.reports.list(&filter).await?;
        rows.sort_unstable_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn facets(&self) -> Result<Facets, Error> {
        Ok(Facets::from(self.facets.load().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockFacetsQuery, MockTicketReportQuery, WorkshopRepositoryError};
    use crate::domain::{ErrorCode, FacetSource, FilterField, TicketId};
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn row(id: i64) -> TicketReport {
        TicketReport {
            id: TicketId::new(id),
            klient: None,
            marka: None,
            klasa: None,
            sn: None,
            status: "new".into(),
            data_przyjecia: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            data_zakonczenia: None,
            usterka: None,
            opis: None,
        }
    }

    #[tokio::test]
    async fn list_tickets_forwards_filter_and_orders_descending() {
        let filter = TicketFilter::default().with(FilterField::Status, Some("new".into()));
        let mut reports = MockTicketReportQuery::new();
        reports
            .expect_list()
            .with(eq(filter.clone()))
            .times(1)
            .return_once(|_| Ok(vec![row(2), row(7), row(5)]));

        let rows = ReportingService::new(Arc::new(reports), Arc::new(MockFacetsQuery::new()))
            .list_tickets(filter)
            .await
            .expect("report loads");

        let ids: Vec<i64> = rows.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![7, 5, 2]);
    }

    #[tokio::test]
    async fn facets_are_deduplicated() {
        let mut facets = MockFacetsQuery::new();
        facets.expect_load().return_once(|| {
            Ok(FacetSource {
                brands: vec![Some("Bosch".into()), Some("Bosch".into()), None],
                ..FacetSource::default()
            })
        });

        let result = ReportingService::new(Arc::new(MockTicketReportQuery::new()), Arc::new(facets))
            .facets()
            .await
            .expect("facets load");

        assert_eq!(result.marki, vec!["Bosch"]);
    }

    #[tokio::test]
    async fn report_failure_is_internal() {
        let mut reports = MockTicketReportQuery::new();
        reports
            .expect_list()
            .return_once(|_| Err(WorkshopRepositoryError::query("relation missing")));

        let err = ReportingService::new(Arc::new(reports), Arc::new(MockFacetsQuery::new()))
            .list_tickets(TicketFilter::default())
            .await
            .expect_err("store failed");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
