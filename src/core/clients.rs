//! Client directory over the base's `Clients` table.
//!
//! Reads overlay the URL fallback store: the base field wins, the fallback
//! file fills the gaps. Writes go to the base first and drop down to the
//! fallback file when the base has no URL column.

use crate::core::fields::URL_FIELDS;
use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use crate::store::base::RecordStore;
use crate::store::record::RawRecord;
use crate::store::urls::UrlStore;
use serde_json::{Map, Value};

const DEFAULT_URL_FIELD: &str = "GeneratedPageURL";

pub struct ClientDirectory<'a, S: RecordStore> {
    store: &'a S,
    urls: &'a UrlStore,
    table: String,
    // Discovered URL column, memoized for the lifetime of this directory
    // value only. One directory is built per command invocation.
    url_field: Option<String>,
}

impl<'a, S: RecordStore> ClientDirectory<'a, S> {
    pub fn new(store: &'a S, urls: &'a UrlStore, table: &str) -> Self {
        Self {
            store,
            urls,
            table: table.to_string(),
            url_field: None,
        }
    }

    /// All clients, in base order, with the fallback URL overlay applied.
    pub fn list(&mut self) -> AppResult<Vec<Client>> {
        let records = self.store.list(&self.table).map_err(|e| {
            eprintln!("⚠️  Upstream fetch failed: {e}");
            AppError::Fetch("clients".to_string())
        })?;

        let url_field = self.url_field_from_sample(records.first());
        let fallback = self.urls.load_all();

        Ok(records
            .iter()
            .map(|r| to_client(r, &url_field, fallback.get(&r.id).cloned()))
            .collect())
    }

    /// One client; `Ok(None)` when the id does not exist in the base.
    pub fn get(&mut self, id: &str) -> AppResult<Option<Client>> {
        let record = match self.store.find(&self.table, id) {
            Ok(record) => record,
            Err(AppError::RecordNotFound { .. }) => return Ok(None),
            Err(e) => {
                eprintln!("⚠️  Upstream fetch failed: {e}");
                return Err(AppError::Fetch("client".to_string()));
            }
        };

        let url_field = self.url_field_from_sample(Some(&record));
        let fallback = self.urls.get(id);

        Ok(Some(to_client(&record, &url_field, fallback)))
    }

    /// Persist a freshly generated dashboard URL.
    ///
    /// Order of attempts: base column → fallback file when the column does
    /// not exist → fallback file as a last resort on any other store error.
    pub fn update_generated_url(&mut self, id: &str, url: &str) -> AppResult<()> {
        let field = self.url_field_from_sample(None);

        let mut fields = Map::new();
        fields.insert(field, Value::String(url.to_string()));

        match self.store.update(&self.table, id, &fields) {
            Ok(()) => Ok(()),
            Err(AppError::UnknownField { .. }) => self.urls.save(id, url),
            Err(e) => {
                eprintln!("⚠️  Upstream update failed: {e}");
                if self.urls.save(id, url).is_ok() {
                    return Ok(());
                }
                Err(AppError::Update("client URL".to_string()))
            }
        }
    }

    /// Resolve the URL column name, probing the alias list against a sample
    /// record. `sample` lets callers that already hold a record skip the
    /// extra listing. Falls back to the conventional name when nothing
    /// matches, and memoizes whatever it decided.
    fn url_field_from_sample(&mut self, sample: Option<&RawRecord>) -> String {
        if let Some(field) = &self.url_field {
            return field.clone();
        }

        let owned_sample;
        let sample = match sample {
            Some(record) => Some(record),
            None => {
                owned_sample = self
                    .store
                    .list(&self.table)
                    .ok()
                    .and_then(|records| records.into_iter().next());
                owned_sample.as_ref()
            }
        };

        let field = sample
            .and_then(|record| {
                URL_FIELDS
                    .iter()
                    .find(|name| record.fields.contains_key(**name))
            })
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_URL_FIELD.to_string());

        self.url_field = Some(field.clone());
        field
    }
}

fn to_client(record: &RawRecord, url_field: &str, fallback_url: Option<String>) -> Client {
    let base_url = record
        .fields
        .get(url_field)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty());

    Client {
        id: record.id.clone(),
        name: record
            .fields
            .get("Name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        company: record
            .fields
            .get("Company")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty()),
        generated_page_url: base_url.or(fallback_url),
    }
}
