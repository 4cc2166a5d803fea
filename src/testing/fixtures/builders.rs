//! Test data builders for dataset scenarios

use crate::data::{Airline, Airport, Dataset, Route};

/// Builder for in-memory datasets
#[derive(Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airline(mut self, id: &str, name: &str, code: &str) -> Self {
        self.dataset.airlines.push(Airline {
            airline_id: Some(id.to_string()),
            airline_name: Some(name.to_string()),
            airline_icao_unique_code: Some(code.to_string()),
        });
        self
    }

    pub fn airport(
        mut self,
        id: &str,
        name: &str,
        city: &str,
        country: &str,
        icao: &str,
        altitude: &str,
    ) -> Self {
        self.dataset.airports.push(Airport {
            airport_id: Some(id.to_string()),
            airport_name: Some(name.to_string()),
            airport_city: Some(city.to_string()),
            airport_country: Some(country.to_string()),
            airport_icao_unique_code: Some(icao.to_string()),
            airport_altitude: Some(altitude.to_string()),
        });
        self
    }

    pub fn route(mut self, from: &str, to: &str, airline: &str) -> Self {
        self.dataset.routes.push(Route {
            route_from_airport_id: Some(from.to_string()),
            route_to_airport_id: Some(to.to_string()),
            route_airline_id: Some(airline.to_string()),
        });
        self
    }

    /// Add the same route `times` times
    pub fn routes(mut self, times: usize, from: &str, to: &str, airline: &str) -> Self {
        for _ in 0..times {
            self = self.route(from, to, airline);
        }
        self
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }
}
