use chrono::Utc;
use uuid::Uuid;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Hospital, HospitalUpdate, NewHospital};
use crate::repository::{HospitalRepository, StorageRow, StoreError};

/// Stateless gateway between the public API and the remote `hospitals` table.
#[derive(Clone)]
pub struct HospitalService {
    repo: HospitalRepository,
}

pub fn new_hospital_id() -> String {
    Uuid::new_v4().to_string()
}

/// Server-side UTC date in `YYYY-MM-DD` form.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

impl HospitalService {
    pub fn new(repo: HospitalRepository) -> Self {
        Self { repo }
    }

    /// Writes a new record and returns it in storage shape, exactly as sent.
    pub async fn create(&self, input: NewHospital) -> Result<StorageRow, AppError> {
        let hospital = Hospital::from_new(input, new_hospital_id(), today());
        tracing::info!("{} Creating hospital: {}", API_NAME, hospital.id);

        let row = hospital
            .to_storage_document()
            .map_err(|e| AppError::Create(StoreError::Codec(e)))?;

        self.repo.insert(&row).await.map_err(AppError::Create)?;

        tracing::info!("{} Successfully created hospital: {}", API_NAME, hospital.id);
        Ok(row)
    }

    /// Every stored record in whatever order the store returns them. One
    /// undecodable row fails the whole listing.
    pub async fn list_all(&self) -> Result<Vec<Hospital>, AppError> {
        let rows = self.repo.fetch_all().await.map_err(AppError::Fetch)?;
        tracing::debug!("{} Fetched {} hospital rows", API_NAME, rows.len());

        rows.into_iter()
            .map(Hospital::from_storage_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Fetch(StoreError::Codec(e)))
    }

    pub async fn update(&self, id: &str, update: HospitalUpdate) -> Result<(), AppError> {
        tracing::info!("{} Updating hospital: {}", API_NAME, id);

        let patch = update
            .to_storage_patch(today())
            .map_err(|e| AppError::Update(StoreError::Codec(e)))?;

        self.repo.update(id, &patch).await.map_err(AppError::Update)?;

        tracing::info!(
            "{} Successfully updated hospital {} ({} columns)",
            API_NAME,
            id,
            patch.len()
        );
        Ok(())
    }
}
