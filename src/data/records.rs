//! Record types for the airline, airport and route collections
//!
//! Every field is optional text. A null or absent value stays `None`, which
//! keeps it apart from an empty string: missing keys never join and never
//! form a group of their own.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An airline as listed in the airlines document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    #[serde(default, deserialize_with = "scalar_text")]
    pub airline_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub airline_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub airline_icao_unique_code: Option<String>,
}

/// An airport as listed in the airports document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(default, deserialize_with = "scalar_text")]
    pub airport_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub airport_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub airport_city: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub airport_country: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub airport_icao_unique_code: Option<String>,
    /// Kept as text; see [`Airport::altitude`]
    #[serde(default, deserialize_with = "scalar_text")]
    pub airport_altitude: Option<String>,
}

impl Airport {
    /// Altitude coerced to a number
    ///
    /// Anything that does not parse as a finite number is missing.
    pub fn altitude(&self) -> Option<f64> {
        self.airport_altitude
            .as_deref()?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// A directed route between two airports, flown by one airline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The datasets spell this field without the second `r`
    #[serde(
        rename = "route_from_aiport_id",
        alias = "route_from_airport_id",
        default,
        deserialize_with = "scalar_text"
    )]
    pub route_from_airport_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub route_to_airport_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub route_airline_id: Option<String>,
}

/// The three collections every query reads from
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub airlines: Vec<Airline>,
    pub airports: Vec<Airport>,
    pub routes: Vec<Route>,
}

impl Dataset {
    pub fn new(airlines: Vec<Airline>, airports: Vec<Airport>, routes: Vec<Route>) -> Self {
        Self {
            airlines,
            airports,
            routes,
        }
    }
}

/// Read any scalar as its textual form; null stays missing
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<String>, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Option<String>, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<String>, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<String>, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<String>, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Option<String>, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Option<String>, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Option<String>, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Option<String>, D::Error> {
            d.deserialize_any(ScalarText)
        }
    }

    deserializer.deserialize_any(ScalarText)
}
