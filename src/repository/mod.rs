pub mod errors;
pub mod hospital_repo;

pub use errors::StoreError;
pub use hospital_repo::{HospitalRepository, StorageRow};
