//! Flat reporting view over tickets, machines and clients.
//!
//! Rows come from a left-outer join, so every descriptive field borrowed from
//! the machine or client may be null when the reference dangles.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::TicketId;

/// One denormalised ticket row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TicketReport {
    #[schema(value_type = i64, example = 12)]
    pub id: TicketId,
    #[schema(example = "Acme")]
    pub klient: Option<String>,
    #[schema(example = "Bosch")]
    pub marka: Option<String>,
    #[schema(example = "wiertarka")]
    pub klasa: Option<String>,
    #[schema(example = "SN-001")]
    pub sn: Option<String>,
    #[schema(example = "in_progress")]
    pub status: String,
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub data_przyjecia: NaiveDate,
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-09")]
    pub data_zakonczenia: Option<NaiveDate>,
    #[schema(example = "leak")]
    pub usterka: Option<String>,
    pub opis: Option<String>,
}

impl TicketReport {
    /// Value of the column a filter clause inspects.
    pub fn field_value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Client => self.klient.as_deref(),
            FilterField::Brand => self.marka.as_deref(),
            FilterField::Class => self.klasa.as_deref(),
            FilterField::SerialNumber => self.sn.as_deref(),
            FilterField::Status => Some(self.status.as_str()),
            FilterField::Fault => self.usterka.as_deref(),
        }
    }
}

/// Report columns that accept a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Client,
    Brand,
    Class,
    SerialNumber,
    Status,
    Fault,
}

impl FilterField {
    /// Status is matched exactly; every other column by substring.
    pub fn operator(self) -> FilterOperator {
        match self {
            Self::Status => FilterOperator::Equals,
            _ => FilterOperator::Contains,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// Case-insensitive substring match.
    Contains,
    /// Exact, case-sensitive match.
    Equals,
}

/// A single `field operator value` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub field: FilterField,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterClause {
    /// Null columns never match.
    pub fn matches(&self, row: &TicketReport) -> bool {
        let Some(actual) = row.field_value(self.field) else {
            return false;
        };
        match self.operator {
            FilterOperator::Equals => actual == self.value,
            FilterOperator::Contains => actual
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
        }
    }
}

/// Conjunction of filter clauses applied to the report.
///
/// # Examples
/// ```
/// use workshop::domain::{FilterField, TicketFilter};
///
/// let filter = TicketFilter::default()
///     .with(FilterField::Client, Some("acme".into()))
///     .with(FilterField::Brand, Some("  ".into()));
/// assert_eq!(filter.clauses().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    clauses: Vec<FilterClause>,
}

impl TicketFilter {
    /// Add a clause for `field`; absent or blank values add nothing.
    #[must_use]
    pub fn with(mut self, field: FilterField, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.clauses.push(FilterClause {
                field,
                operator: field.operator(),
                value,
            });
        }
        self
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, row: &TicketReport) -> bool {
        self.clauses.iter().all(|clause| clause.matches(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> TicketReport {
        TicketReport {
            id: TicketId::new(1),
            klient: Some("Acme Corp".into()),
            marka: Some("Bosch".into()),
            klasa: None,
            sn: Some("SN-001".into()),
            status: "done".into(),
            data_przyjecia: NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date"),
            data_zakonczenia: None,
            usterka: Some("Leaking hose".into()),
            opis: None,
        }
    }

    #[rstest]
    #[case(FilterField::Client, "acme", true)]
    #[case(FilterField::Client, "ACME CORP", true)]
    #[case(FilterField::Client, "Initech", false)]
    #[case(FilterField::Brand, "osc", true)]
    #[case(FilterField::SerialNumber, "sn-0", true)]
    #[case(FilterField::Fault, "leak", true)]
    #[case(FilterField::Status, "done", true)]
    #[case(FilterField::Status, "Done", false)]
    #[case(FilterField::Status, "do", false)]
    fn single_clause_matching(
        row: TicketReport,
        #[case] field: FilterField,
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        let filter = TicketFilter::default().with(field, Some(value.into()));
        assert_eq!(filter.matches(&row), expected);
    }

    #[rstest]
    fn null_column_never_matches_substring(row: TicketReport) {
        let filter = TicketFilter::default().with(FilterField::Class, Some("a".into()));
        assert!(!filter.matches(&row));
    }

    #[rstest]
    fn clauses_are_combined_with_and(row: TicketReport) {
        let filter = TicketFilter::default()
            .with(FilterField::Client, Some("acme".into()))
            .with(FilterField::Status, Some("new".into()));
        assert!(!filter.matches(&row));
    }

    #[rstest]
    fn empty_filter_matches_everything(row: TicketReport) {
        let filter = TicketFilter::default().with(FilterField::Brand, None);
        assert!(filter.is_empty());
        assert!(filter.matches(&row));
    }
}
