//! Test fixtures and data builders
//!
//! This module provides dataset builders and a small set of ready-made
//! datasets shared by unit tests, integration tests and benchmarks.

pub mod builders;

use crate::data::Dataset;
use builders::DatasetBuilder;

/// Common datasets for various scenarios
pub struct Fixtures;

impl Fixtures {
    /// A handful of Canadian and foreign airports with a mix of routes
    ///
    /// Air Canada flies 9 routes into Canada, WestJet 4 and Porter 3.
    /// One airport has a non-numeric altitude, one route points at an
    /// airport that does not exist and one at an unknown airline.
    pub fn canadian_sample() -> Dataset {
        DatasetBuilder::new()
            .airline("330", "Air Canada", "ACA")
            .airline("5085", "WestJet", "WJA")
            .airline("2988", "Porter Airlines", "POE")
            .airline("324", "All Nippon Airways", "ANA")
            .airport("193", "Lester B. Pearson International Airport", "Toronto", "Canada", "CYYZ", "569")
            .airport("156", "Vancouver International Airport", "Vancouver", "Canada", "CYVR", "14")
            .airport("178", "Calgary International Airport", "Calgary", "Canada", "CYYC", "3557")
            .airport("27", "Iqaluit Airport", "Iqaluit", "Canada", "CYFB", "unknown")
            .airport("2359", "Narita International Airport", "Tokyo", "Japan", "RJAA", "141")
            .airport("507", "London Heathrow Airport", "London", "United Kingdom", "EGLL", "83")
            .routes(5, "2359", "193", "330")
            .routes(3, "2359", "156", "5085")
            .routes(3, "193", "178", "2988")
            .route("178", "156", "5085")
            .route("178", "156", "330")
            .route("156", "193", "330")
            .route("193", "27", "330")
            .route("27", "178", "330")
            .route("193", "2359", "324")
            .route("507", "2359", "324")
            .route("193", "507", "330")
            .route("193", "9999", "330")
            .route("156", "178", "404")
            .build()
    }

    /// A wide synthetic dataset, large enough to exercise every row cap
    pub fn synthetic(airports: usize, routes_per_airport: usize) -> Dataset {
        let mut builder = DatasetBuilder::new();
        for a in 0..25 {
            builder = builder.airline(&a.to_string(), &format!("Airline {:02}", a), &format!("AL{}", a));
        }
        for p in 0..airports {
            let country = if p % 3 == 0 {
                "Canada".to_string()
            } else {
                format!("Country {:02}", p % 40)
            };
            builder = builder.airport(
                &p.to_string(),
                &format!("Airport {:04}", p),
                &format!("City {:03}", p % 120),
                &country,
                &format!("X{:03}", p),
                &((p * 37) % 5000).to_string(),
            );
        }
        for p in 0..airports {
            for r in 0..routes_per_airport {
                let to = (p * 7 + r * 13) % airports;
                let airline = (p + r) % 25;
                builder = builder.route(&p.to_string(), &to.to_string(), &airline.to_string());
            }
        }
        builder.build()
    }
}
