pub const API_NAME: &str = "[hospital-gateway]";

pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "https://hemo-bank.vercel.app";

pub const HOSPITALS_TABLE: &str = "hospitals";
pub const STORE_TOKEN_HEADER: &str = "X-Cassandra-Token";

pub const LIVENESS_MESSAGE: &str = "Astra DB backend running";
pub const HOSPITAL_ADDED_MESSAGE: &str = "Hospital added successfully";
pub const HOSPITAL_UPDATED_MESSAGE: &str = "Hospital updated successfully";
