//! Public (API) field names and their storage column names.
//!
//! The store keeps column names lowercase while the HTTP API speaks
//! camelCase. Every translation between the two shapes goes through
//! [`HOSPITAL_FIELDS`].

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub public: &'static str,
    pub storage: &'static str,
}

const fn field(public: &'static str, storage: &'static str) -> FieldMapping {
    FieldMapping { public, storage }
}

pub const HOSPITAL_FIELDS: &[FieldMapping] = &[
    field("id", "id"),
    field("hospitalName", "hospitalname"),
    field("country", "country"),
    field("state", "state"),
    field("district", "district"),
    field("address", "address"),
    field("contact", "contact"),
    field("email", "email"),
    field("photo", "photo"),
    field("verified", "verified"),
    field("bloodStock", "bloodstock"),
    field("lastUpdated", "lastupdated"),
];

pub const BLOOD_STOCK_PUBLIC: &str = "bloodStock";
pub const BLOOD_STOCK_STORAGE: &str = "bloodstock";

pub fn storage_name(public: &str) -> Option<&'static str> {
    HOSPITAL_FIELDS
        .iter()
        .find(|f| f.public == public)
        .map(|f| f.storage)
}

pub fn public_name(storage: &str) -> Option<&'static str> {
    HOSPITAL_FIELDS
        .iter()
        .find(|f| f.storage == storage)
        .map(|f| f.public)
}

/// Renames public keys to storage columns. Unknown keys are dropped.
pub fn to_storage_document(public: Map<String, Value>) -> Map<String, Value> {
    rename(public, storage_name)
}

/// Renames storage columns to public keys. Unknown columns are dropped.
pub fn to_public_document(storage: Map<String, Value>) -> Map<String, Value> {
    rename(storage, public_name)
}

fn rename(
    document: Map<String, Value>,
    translate: fn(&str) -> Option<&'static str>,
) -> Map<String, Value> {
    document
        .into_iter()
        .filter_map(|(key, value)| translate(&key).map(|name| (name.to_string(), value)))
        .collect()
}
