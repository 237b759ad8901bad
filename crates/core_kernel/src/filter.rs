//! Filter layer
//!
//! Narrows a collection by flat string query parameters before it is listed
//! or aggregated. Each record type declares a `FilterSpec` mapping the query
//! keys it understands to a field accessor and a match kind.
//!
//! # Rules
//!
//! - All supplied predicates must hold (logical AND)
//! - Absent or empty parameters do not exclude anything
//! - Unknown keys are ignored
//! - Output keeps the input order; the input is never modified
//!
//! # Example
//!
//! ```rust,ignore
//! let spec = FilterSpec::new()
//!     .exact("status", |v: &Vendor| Some(v.status.as_str().into()))
//!     .substring("search", |v: &Vendor| Some(v.legal_name.as_str().into()));
//!
//! let active = spec.apply(&vendors, &params);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use crate::temporal::parse_iso_date;

/// Flat mapping of query parameter names to values
pub type QueryParams = HashMap<String, String>;

/// Reads the filterable value of a field; `None` when the record lacks it
pub type FieldAccessor<T> = for<'a> fn(&'a T) -> Option<Cow<'a, str>>;

/// How a query value is compared with a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Field equals the value exactly
    Exact,
    /// Field contains the value, ignoring case
    Substring,
    /// ISO date field is on or after the value
    OnOrAfter,
    /// ISO date field is on or before the value
    OnOrBefore,
}

/// A recognized filter key
pub struct FilterField<T> {
    /// Query parameter name
    pub key: &'static str,
    /// Comparison to apply
    pub kind: MatchKind,
    accessor: FieldAccessor<T>,
}

impl<T> FilterField<T> {
    /// Creates a filter field
    pub fn new(key: &'static str, kind: MatchKind, accessor: FieldAccessor<T>) -> Self {
        Self { key, kind, accessor }
    }

    fn matches(&self, record: &T, value: &str) -> bool {
        let Some(field) = (self.accessor)(record) else {
            return false;
        };

        match self.kind {
            MatchKind::Exact => field == value,
            MatchKind::Substring => field.to_lowercase().contains(&value.to_lowercase()),
            MatchKind::OnOrAfter | MatchKind::OnOrBefore => {
                // A bound that is not a date cannot narrow anything
                let Ok(bound) = parse_iso_date(value) else {
                    return true;
                };
                let Ok(date) = parse_iso_date(&field) else {
                    return false;
                };
                if self.kind == MatchKind::OnOrAfter {
                    date >= bound
                } else {
                    date <= bound
                }
            }
        }
    }
}

/// Filter configuration for one record type
pub struct FilterSpec<T> {
    fields: Vec<FilterField<T>>,
}

impl<T> Default for FilterSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FilterSpec<T> {
    /// Creates a spec that recognizes no keys
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a recognized field
    pub fn field(mut self, field: FilterField<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an exact-match key
    pub fn exact(self, key: &'static str, accessor: FieldAccessor<T>) -> Self {
        self.field(FilterField::new(key, MatchKind::Exact, accessor))
    }

    /// Adds a case-insensitive substring key
    pub fn substring(self, key: &'static str, accessor: FieldAccessor<T>) -> Self {
        self.field(FilterField::new(key, MatchKind::Substring, accessor))
    }

    /// Adds an inclusive lower date bound key
    pub fn on_or_after(self, key: &'static str, accessor: FieldAccessor<T>) -> Self {
        self.field(FilterField::new(key, MatchKind::OnOrAfter, accessor))
    }

    /// Adds an inclusive upper date bound key
    pub fn on_or_before(self, key: &'static str, accessor: FieldAccessor<T>) -> Self {
        self.field(FilterField::new(key, MatchKind::OnOrBefore, accessor))
    }

    /// Keys this spec understands
    pub fn recognized_keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.key).collect()
    }

    /// Returns true when the record satisfies every supplied predicate
    pub fn matches(&self, record: &T, params: &QueryParams) -> bool {
        self.active(params)
            .iter()
            .all(|(field, value)| field.matches(record, value))
    }

    /// Returns the matching records, in input order
    pub fn apply(&self, records: &[T], params: &QueryParams) -> Vec<T>
    where
        T: Clone,
    {
        let active = self.active(params);
        records
            .iter()
            .filter(|record| active.iter().all(|(field, value)| field.matches(record, value)))
            .cloned()
            .collect()
    }

    fn active<'a>(&'a self, params: &'a QueryParams) -> Vec<(&'a FilterField<T>, &'a str)> {
        self.fields
            .iter()
            .filter_map(|field| {
                params
                    .get(field.key)
                    .map(String::as_str)
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| (field, value))
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        status: String,
    }

    fn status_spec() -> FilterSpec<Row> {
        FilterSpec::new().exact("status", |r: &Row| Some(Cow::Borrowed(r.status.as_str())))
    }

    fn status_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("PENDING".to_string()),
            Just("SUBMITTED".to_string()),
            Just("BILLED".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn filtering_by_status_only_keeps_that_status(
            statuses in proptest::collection::vec(status_strategy(), 0..50),
            wanted in status_strategy()
        ) {
            let rows: Vec<Row> = statuses.into_iter().map(|status| Row { status }).collect();
            let mut params = QueryParams::new();
            params.insert("status".to_string(), wanted.clone());

            let filtered = status_spec().apply(&rows, &params);

            prop_assert!(filtered.len() <= rows.len());
            prop_assert!(filtered.iter().all(|r| r.status == wanted));
        }

        #[test]
        fn filtering_without_params_is_identity(
            statuses in proptest::collection::vec(status_strategy(), 0..50)
        ) {
            let rows: Vec<Row> = statuses.into_iter().map(|status| Row { status }).collect();
            prop_assert_eq!(status_spec().apply(&rows, &QueryParams::new()), rows);
        }
    }
}
