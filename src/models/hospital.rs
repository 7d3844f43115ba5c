use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::blood_stock::{self, BloodStock};
use super::field_map::{self, BLOOD_STOCK_PUBLIC, BLOOD_STOCK_STORAGE};

/// A hospital record in its public (API) shape. Free-text columns hold
/// whatever JSON value was written; columns never written come back as
/// `null` and are treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_stock: Option<BloodStock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Body of a create request. Nothing is required or validated; values are
/// forwarded as given and absent fields are simply not written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHospital {
    pub hospital_name: Option<Value>,
    pub country: Option<Value>,
    pub state: Option<Value>,
    pub district: Option<Value>,
    pub address: Option<Value>,
    pub contact: Option<Value>,
    pub email: Option<Value>,
    pub photo: Option<Value>,
    pub blood_stock: Option<BloodStock>,
}

/// Body of an update request. `id`, `verified` and `lastUpdated` are not
/// accepted from clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_stock: Option<BloodStock>,
}

impl Hospital {
    /// Assembles a fresh record. New records are never verified and the
    /// photo defaults to an empty string.
    pub fn from_new(input: NewHospital, id: String, today: String) -> Self {
        Self {
            id,
            hospital_name: input.hospital_name,
            country: input.country,
            state: input.state,
            district: input.district,
            address: input.address,
            contact: input.contact,
            email: input.email,
            photo: Some(input.photo.unwrap_or_else(|| Value::String(String::new()))),
            verified: Some(false),
            blood_stock: input.blood_stock,
            last_updated: Some(today),
        }
    }

    pub fn to_storage_document(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut public = into_object(self)?;
        encode_blood_stock(&mut public, self.blood_stock.as_ref())?;
        Ok(field_map::to_storage_document(public))
    }

    /// Parses a row returned by the store. Fails when the `bloodstock` blob
    /// cannot be decoded.
    pub fn from_storage_document(mut row: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let stock = match row.remove(BLOOD_STOCK_STORAGE) {
            Some(value) => blood_stock::decode_stored(&value)?,
            None => None,
        };

        let mut public = field_map::to_public_document(row);
        if let Some(stock) = stock {
            public.insert(BLOOD_STOCK_PUBLIC.to_string(), serde_json::to_value(stock)?);
        }
        serde_json::from_value(Value::Object(public))
    }
}

impl HospitalUpdate {
    /// Builds the partial document sent to the store. `bloodstock` is only
    /// present when the client supplied it; `lastupdated` is always stamped.
    pub fn to_storage_patch(&self, today: String) -> Result<Map<String, Value>, serde_json::Error> {
        let mut public = into_object(self)?;
        encode_blood_stock(&mut public, self.blood_stock.as_ref())?;
        public.insert("lastUpdated".to_string(), Value::String(today));
        Ok(field_map::to_storage_document(public))
    }
}

fn encode_blood_stock(
    public: &mut Map<String, Value>,
    stock: Option<&BloodStock>,
) -> Result<(), serde_json::Error> {
    if let Some(stock) = stock {
        let text = blood_stock::encode(stock)?;
        public.insert(BLOOD_STOCK_PUBLIC.to_string(), Value::String(text));
    }
    Ok(())
}

fn into_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(serde::ser::Error::custom("expected a JSON object")),
    }
}
