pub mod blood_stock;
pub mod field_map;
pub mod hospital;

pub use blood_stock::BloodStock;
pub use hospital::{Hospital, HospitalUpdate, NewHospital};
