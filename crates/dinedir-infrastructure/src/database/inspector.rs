// ============================================================================
// DineDir Infrastructure - Store Inspector
// File: crates/dinedir-infrastructure/src/database/inspector.rs
// ============================================================================
//! Enumerates databases, collections, and document counts for debugging

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Client;
use tracing::error;

use dinedir_core::domain::{CollectionSummary, DatabaseSummary, StoreReport};
use dinedir_core::error::DomainError;
use dinedir_core::repositories::StoreInspector;

const SYSTEM_DATABASES: &[&str] = &["admin", "local", "config"];

pub struct MongoStoreInspector {
    client: Client,
    current_db_name: String,
}

impl MongoStoreInspector {
    pub fn new(client: Client, current_db_name: String) -> Self {
        Self {
            client,
            current_db_name,
        }
    }
}

#[async_trait]
impl StoreInspector for MongoStoreInspector {
    async fn report(&self) -> Result<StoreReport, DomainError> {
        let names = self.client.list_database_names().await.map_err(|e| {
            error!("Database error listing databases: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut databases = Vec::new();
        for name in names {
            if SYSTEM_DATABASES.contains(&name.as_str()) {
                continue;
            }
            let db = self.client.database(&name);
            let collection_names = db.list_collection_names().await.map_err(|e| {
                error!("Database error listing collections of {}: {}", name, e);
                DomainError::DatabaseError(e.to_string())
            })?;

            let mut collections = Vec::new();
            for collection_name in collection_names {
                let document_count = db
                    .collection::<Document>(&collection_name)
                    .count_documents(doc! {})
                    .await
                    .map_err(|e| {
                        error!("Database error counting {}.{}: {}", name, collection_name, e);
                        DomainError::DatabaseError(e.to_string())
                    })?;
                collections.push(CollectionSummary {
                    name: collection_name,
                    document_count,
                });
            }

            databases.push(DatabaseSummary {
                is_current_db: name == self.current_db_name,
                name,
                collections,
            });
        }

        Ok(StoreReport {
            current_db_name: self.current_db_name.clone(),
            databases,
        })
    }
}
