use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A kind of therapy the intake can recommend.
///
/// `score` is only meaningful on values returned by the scorer; catalog
/// entries always carry zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Lowercase terms matched against answers and question ids.
    pub keywords: Vec<String>,
    pub score: u32,
}

impl TherapyCategory {
    pub fn new(id: &str, name: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            score: 0,
        }
    }
}
