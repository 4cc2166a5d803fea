//! Join & aggregate engine
//!
//! Questions are identified by [`Question`] and resolved through a static
//! table of [`QuestionSpec`]s, which carries everything the pipeline needs
//! to run a question and present its answer: row cap, chart wording and the
//! query itself.

pub mod aggregate;
pub mod join;
pub mod queries;

use crate::data::Dataset;
use crate::format::{to_result_rows, ResultRow};
use std::fmt;
use std::str::FromStr;

/// Country used by the country-scoped questions unless configured otherwise
pub const DEFAULT_COUNTRY: &str = "Canada";

/// One of the five fixed questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Airlines with the most routes into the target country
    TopAirlinesToCountry,
    /// Destination countries that appear least often
    LeastFrequentCountries,
    /// Most frequent destination airports
    TopDestinationAirports,
    /// Most frequent destination cities
    TopDestinationCities,
    /// Domestic routes with the biggest altitude difference
    TopAltitudeDifferences,
}

impl Question {
    pub const ALL: [Question; 5] = [
        Question::TopAirlinesToCountry,
        Question::LeastFrequentCountries,
        Question::TopDestinationAirports,
        Question::TopDestinationCities,
        Question::TopAltitudeDifferences,
    ];

    /// Resolve a question identifier such as `q3`
    ///
    /// Unknown identifiers resolve to `None`; callers treat that as "nothing
    /// to do" rather than an error.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.id() == id)
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn spec(self) -> &'static QuestionSpec {
        &QUESTIONS[self as usize]
    }

    /// Run the question and format its answer
    pub fn run(self, dataset: &Dataset, options: &QueryOptions) -> Vec<ResultRow> {
        let spec = self.spec();
        (spec.query)(dataset, options, spec.limit)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Question {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown question '{}'", s))
    }
}

/// Parameters shared by all questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Country used by the country-scoped questions
    pub country: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

type QueryFn = fn(&Dataset, &QueryOptions, usize) -> Vec<ResultRow>;

/// Static description of a question
pub struct QuestionSpec {
    pub question: Question,
    pub id: &'static str,
    /// Maximum number of result rows
    pub limit: usize,
    /// Chart title; `{country}` is replaced by the target country
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    query: QueryFn,
}

impl QuestionSpec {
    pub fn title(&self, options: &QueryOptions) -> String {
        self.title.replace("{country}", &options.country)
    }
}

// Indexed by `Question as usize`
static QUESTIONS: [QuestionSpec; 5] = [
    QuestionSpec {
        question: Question::TopAirlinesToCountry,
        id: "q1",
        limit: 20,
        title: "Top 20 Airlines with routes to {country}",
        x_label: "Subject",
        y_label: "Number of Routes",
        query: |dataset, options, limit| {
            to_result_rows(&queries::top_airlines_to_country(
                dataset,
                &options.country,
                limit,
            ))
        },
    },
    QuestionSpec {
        question: Question::LeastFrequentCountries,
        id: "q2",
        limit: 30,
        title: "30 Countries with Least Appearances as Destination",
        x_label: "Subject",
        y_label: "Number of Appearances",
        query: |dataset, _, limit| to_result_rows(&queries::least_frequent_countries(dataset, limit)),
    },
    QuestionSpec {
        question: Question::TopDestinationAirports,
        id: "q3",
        limit: 10,
        title: "Top 10 Destination Airports",
        x_label: "Subject",
        y_label: "Number of Routes",
        query: |dataset, _, limit| to_result_rows(&queries::top_destination_airports(dataset, limit)),
    },
    QuestionSpec {
        question: Question::TopDestinationCities,
        id: "q4",
        limit: 15,
        title: "Top 15 Destination Cities",
        x_label: "Subject",
        y_label: "Number of Routes",
        query: |dataset, _, limit| to_result_rows(&queries::top_destination_cities(dataset, limit)),
    },
    QuestionSpec {
        question: Question::TopAltitudeDifferences,
        id: "q5",
        limit: 10,
        title: "Top 10 Routes within {country} with Biggest Altitude Difference",
        x_label: "Subject",
        y_label: "Altitude Difference",
        query: |dataset, options, limit| {
            to_result_rows(&queries::top_altitude_differences(
                dataset,
                &options.country,
                limit,
            ))
        },
    },
];
