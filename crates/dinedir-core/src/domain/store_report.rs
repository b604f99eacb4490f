//! Store inspection report

use serde::{Deserialize, Serialize};

/// Databases, collections, and document counts visible to the store client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReport {
    pub current_db_name: String,
    pub databases: Vec<DatabaseSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSummary {
    pub name: String,
    pub is_current_db: bool,
    pub collections: Vec<CollectionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub name: String,
    pub document_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_camel_case_names() {
        let report = StoreReport {
            current_db_name: "restaurantDirectory".to_string(),
            databases: vec![DatabaseSummary {
                name: "restaurantDirectory".to_string(),
                is_current_db: true,
                collections: vec![CollectionSummary {
                    name: "restaurants".to_string(),
                    document_count: 3,
                }],
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["currentDbName"], "restaurantDirectory");
        assert_eq!(json["databases"][0]["isCurrentDb"], true);
        assert_eq!(json["databases"][0]["collections"][0]["documentCount"], 3);
    }
}
