use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::constants::{HOSPITALS_TABLE, STORE_TOKEN_HEADER};
use crate::repository::errors::StoreError;

pub type StorageRow = Map<String, Value>;

#[derive(Debug, Deserialize)]
struct RowsResponse {
    #[serde(default)]
    data: Vec<StorageRow>,
}

/// REST client for the `hospitals` table of the remote store.
#[derive(Clone)]
pub struct HospitalRepository {
    client: Client,
    table_url: String,
    token: String,
}

impl HospitalRepository {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.store_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            table_url: format!("{}/{}", config.store_url(), HOSPITALS_TABLE),
            token: config.astra_token.clone(),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    /// URL of a single row. The id always stays one path segment of the
    /// table; dot segments would be resolved away by the URL parser.
    fn record_url(&self, id: &str) -> Result<String, StoreError> {
        if matches!(id, "" | "." | "..") {
            return Err(StoreError::InvalidKey(id.to_string()));
        }
        Ok(format!("{}/{}", self.table_url, urlencoding::encode(id)))
    }

    pub async fn insert(&self, row: &StorageRow) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.table_url)
            .header(STORE_TOKEN_HEADER, &self.token)
            .json(row)
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    /// Fetches every row. The store insists on a `where` parameter, so an
    /// empty filter is sent.
    pub async fn fetch_all(&self) -> Result<Vec<StorageRow>, StoreError> {
        let response = self
            .client
            .get(&self.table_url)
            .header(STORE_TOKEN_HEADER, &self.token)
            .query(&[("where", "{}")])
            .send()
            .await?;

        let text = ensure_success(response).await?.text().await?;
        let rows: RowsResponse = serde_json::from_str(&text)?;
        Ok(rows.data)
    }

    /// Writes the given columns of row `id`. Columns absent from `patch` are
    /// left to the store's partial-update behavior.
    pub async fn update(&self, id: &str, patch: &StorageRow) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.record_url(id)?)
            .header(STORE_TOKEN_HEADER, &self.token)
            .json(patch)
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Err(StoreError::from_status(status, body))
}
