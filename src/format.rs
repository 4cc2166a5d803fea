//! Result rows and the label templates that produce them
//!
//! Every query ends as an ordered list of [`ResultRow`]s. The engine hands
//! typed aggregates to [`to_result_rows`], which applies each aggregate's
//! label template and keeps the ranking order intact.

use serde::Serialize;
use std::fmt;

/// The numeric half of a result row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statistic {
    /// Number of routes counted for a subject
    Count(u64),
    /// A real-valued measurement such as an altitude difference
    Measure(f64),
}

impl Statistic {
    pub fn as_f64(&self) -> f64 {
        match self {
            Statistic::Count(count) => *count as f64,
            Statistic::Measure(value) => *value,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Count(count) => write!(f, "{}", count),
            Statistic::Measure(value) => write!(f, "{}", value),
        }
    }
}

/// One `(subject, statistic)` pair, shared by the CSV exporter and the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub subject: String,
    pub statistic: Statistic,
}

impl ResultRow {
    pub fn new(subject: impl Into<String>, statistic: Statistic) -> Self {
        Self {
            subject: subject.into(),
            statistic,
        }
    }
}

/// An aggregate row that knows how to label itself
pub trait Labelled {
    fn subject(&self) -> String;
    fn statistic(&self) -> Statistic;
}

/// Apply label templates, preserving order
pub fn to_result_rows<A: Labelled>(rows: &[A]) -> Vec<ResultRow> {
    rows.iter()
        .map(|row| ResultRow::new(row.subject(), row.statistic()))
        .collect()
}

/// `"{airline_name} ({airline_code})"`
pub fn airline_label(name: &str, code: &str) -> String {
    format!("{} ({})", name, code)
}

/// `"{airport_name} ({icao_code}), {city}, {country}"`
pub fn airport_label(name: &str, icao: &str, city: &str, country: &str) -> String {
    format!("{} ({}), {}, {}", name, icao, city, country)
}

/// `"{city}, {country}"`
pub fn city_label(city: &str, country: &str) -> String {
    format!("{}, {}", city, country)
}

/// `"{origin_icao}-{destination_icao}"`
pub fn route_label(origin_icao: &str, destination_icao: &str) -> String {
    format!("{}-{}", origin_icao, destination_icao)
}
