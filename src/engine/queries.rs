//! The five route queries
//!
//! Each query is a pure function of the dataset. Routes whose airports or
//! airline are missing from the collections never reach a result, and
//! records with a missing grouping field are not counted.

use super::aggregate::{count_by, dedup_first, take_top};
use super::join::{inner_join, KeyIndex};
use crate::data::{Airline, Airport, Dataset, Route};
use crate::format::{airline_label, airport_label, city_label, route_label, Labelled, Statistic};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct AirlineCount {
    pub airline_name: String,
    pub airline_code: String,
    pub routes: u64,
}

impl Labelled for AirlineCount {
    fn subject(&self) -> String {
        airline_label(&self.airline_name, &self.airline_code)
    }

    fn statistic(&self) -> Statistic {
        Statistic::Count(self.routes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryCount {
    pub country: String,
    pub routes: u64,
}

impl Labelled for CountryCount {
    fn subject(&self) -> String {
        self.country.clone()
    }

    fn statistic(&self) -> Statistic {
        Statistic::Count(self.routes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirportCount {
    pub airport_name: String,
    pub icao_code: String,
    pub city: String,
    pub country: String,
    pub routes: u64,
}

impl Labelled for AirportCount {
    fn subject(&self) -> String {
        airport_label(&self.airport_name, &self.icao_code, &self.city, &self.country)
    }

    fn statistic(&self) -> Statistic {
        Statistic::Count(self.routes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityCount {
    pub city: String,
    pub country: String,
    pub routes: u64,
}

impl Labelled for CityCount {
    fn subject(&self) -> String {
        city_label(&self.city, &self.country)
    }

    fn statistic(&self) -> Statistic {
        Statistic::Count(self.routes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeDifference {
    pub origin_icao: String,
    pub destination_icao: String,
    /// Missing when either altitude is not numeric
    pub difference: Option<f64>,
}

impl Labelled for AltitudeDifference {
    fn subject(&self) -> String {
        route_label(&self.origin_icao, &self.destination_icao)
    }

    fn statistic(&self) -> Statistic {
        Statistic::Measure(self.difference.unwrap_or(f64::NAN))
    }
}

fn airports_by_id(dataset: &Dataset) -> KeyIndex<'_, Airport> {
    KeyIndex::build(&dataset.airports, |airport| airport.airport_id.as_deref())
}

/// Missing label parts render as empty text
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn in_country(airport: &Airport, country: &str) -> bool {
    airport.airport_country.as_deref() == Some(country)
}

/// Every route joined to its destination airport
fn with_destination<'a>(
    dataset: &'a Dataset,
    airports: &KeyIndex<'a, Airport>,
) -> Vec<(&'a Route, &'a Airport)> {
    inner_join(
        dataset.routes.iter(),
        |route| route.route_to_airport_id.as_deref(),
        airports,
    )
}

/// Airlines with the most routes into `country`, ties by name
pub fn top_airlines_to_country(dataset: &Dataset, country: &str, limit: usize) -> Vec<AirlineCount> {
    let airports = airports_by_id(dataset);
    let airlines = KeyIndex::build(&dataset.airlines, |airline| airline.airline_id.as_deref());

    let inbound: Vec<_> = with_destination(dataset, &airports)
        .into_iter()
        .filter(|(_, destination)| in_country(destination, country))
        .collect();
    let flown = inner_join(inbound, |(route, _)| route.route_airline_id.as_deref(), &airlines);
    trace!("{} routes into {} with a known airline", flown.len(), country);

    let counts = count_by(flown, |(_, airline)| airline.airline_name.clone());

    // Codes come from looking each counted name back up among the airlines
    let by_name = KeyIndex::build(&dataset.airlines, |airline| airline.airline_name.as_deref());
    let mut rows: Vec<AirlineCount> = counts
        .into_iter()
        .flat_map(|(name, routes)| {
            by_name
                .lookup(&name)
                .iter()
                .map(|airline: &&Airline| AirlineCount {
                    airline_name: name.clone(),
                    airline_code: text(&airline.airline_icao_unique_code),
                    routes,
                })
                .collect::<Vec<_>>()
        })
        .collect();

    rows.sort_by(|a, b| {
        b.routes
            .cmp(&a.routes)
            .then_with(|| a.airline_name.cmp(&b.airline_name))
    });
    take_top(rows, limit)
}

/// Destination countries with the fewest routes, ties by name
pub fn least_frequent_countries(dataset: &Dataset, limit: usize) -> Vec<CountryCount> {
    let airports = airports_by_id(dataset);
    let counts = count_by(with_destination(dataset, &airports), |(_, destination)| {
        destination.airport_country.clone()
    });

    let mut rows: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, routes)| CountryCount { country, routes })
        .collect();
    rows.sort_by(|a, b| a.routes.cmp(&b.routes).then_with(|| a.country.cmp(&b.country)));
    take_top(rows, limit)
}

/// Destination airports with the most routes, ties by name
pub fn top_destination_airports(dataset: &Dataset, limit: usize) -> Vec<AirportCount> {
    let airports = airports_by_id(dataset);
    let counts = count_by(with_destination(dataset, &airports), |(_, destination)| {
        destination.airport_name.clone()
    });

    let by_name = KeyIndex::build(&dataset.airports, |airport| airport.airport_name.as_deref());
    let mut rows: Vec<AirportCount> = counts
        .into_iter()
        .flat_map(|(name, routes)| {
            by_name
                .lookup(&name)
                .iter()
                .map(|airport| AirportCount {
                    airport_name: name.clone(),
                    icao_code: text(&airport.airport_icao_unique_code),
                    city: text(&airport.airport_city),
                    country: text(&airport.airport_country),
                    routes,
                })
                .collect::<Vec<_>>()
        })
        .collect();

    rows.sort_by(|a, b| {
        b.routes
            .cmp(&a.routes)
            .then_with(|| a.airport_name.cmp(&b.airport_name))
    });
    take_top(rows, limit)
}

/// Destination cities with the most routes, ties by city then country
pub fn top_destination_cities(dataset: &Dataset, limit: usize) -> Vec<CityCount> {
    let airports = airports_by_id(dataset);
    let counts = count_by(with_destination(dataset, &airports), |(_, destination)| {
        destination
            .airport_city
            .clone()
            .zip(destination.airport_country.clone())
    });

    let mut rows: Vec<CityCount> = counts
        .into_iter()
        .map(|((city, country), routes)| CityCount {
            city,
            country,
            routes,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.routes
            .cmp(&a.routes)
            .then_with(|| a.city.cmp(&b.city))
            .then_with(|| a.country.cmp(&b.country))
    });
    take_top(rows, limit)
}

/// Routes inside `country` with the largest altitude difference
///
/// Labels are deduplicated before ranking, keeping the first route that
/// produced them. Routes without a numeric difference are then dropped.
pub fn top_altitude_differences(
    dataset: &Dataset,
    country: &str,
    limit: usize,
) -> Vec<AltitudeDifference> {
    let airports = airports_by_id(dataset);
    let domestic = inner_join(
        with_destination(dataset, &airports),
        |(route, _)| route.route_from_airport_id.as_deref(),
        &airports,
    )
    .into_iter()
    .filter(|((_, destination), origin)| {
        in_country(origin, country) && in_country(destination, country)
    })
    .map(|((_, destination), origin)| AltitudeDifference {
        origin_icao: text(&origin.airport_icao_unique_code),
        destination_icao: text(&destination.airport_icao_unique_code),
        difference: origin
            .altitude()
            .zip(destination.altitude())
            .map(|(from, to)| (from - to).abs()),
    })
    .collect::<Vec<_>>();

    let mut rows: Vec<AltitudeDifference> = dedup_first(domestic, |row| row.subject())
        .into_iter()
        .filter(|row| row.difference.is_some())
        .collect();
    trace!("{} distinct routes within {} with altitudes", rows.len(), country);

    rows.sort_by(|a, b| {
        let a = a.difference.unwrap_or(f64::NEG_INFINITY);
        let b = b.difference.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
    take_top(rows, limit)
}
