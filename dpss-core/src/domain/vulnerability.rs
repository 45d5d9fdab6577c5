//! Vulnerability knowledge base records

use serde::{Deserialize, Serialize};

/// A vulnerable version range of one package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affected {
    pub id: i64,
    pub name: String,
    pub vendor: String,
    #[serde(rename = "type")]
    pub package_type: String,
    /// `gte` for an inclusive lower bound, anything else is exclusive.
    pub start_condition: String,
    pub start_value: String,
    /// `lte` for an inclusive upper bound, anything else is exclusive.
    pub end_condition: String,
    pub end_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub method: String,
    pub score: f64,
    pub severity: String,
    pub source_name: String,
    pub source_url: String,
    pub vector: String,
    pub version: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: i64,
    pub source: String,
    pub url: String,
}

/// Full vulnerability record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub global_identifier: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub affected: Vec<Affected>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ratings: Vec<Rating>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub references: Vec<Reference>,
}

impl Vulnerability {
    /// Rating shown wherever a single score is needed.
    pub fn primary_rating(&self) -> Option<&Rating> {
        self.ratings.first()
    }
}

/// Row of the knowledge base listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    pub global_identifier: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub severity: Option<String>,
}

/// One backend-paged slice of the knowledge base
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VulnerabilityPage {
    pub vulners: Vec<VulnerabilitySummary>,
    /// Total number of records across all pages.
    pub count: u64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
