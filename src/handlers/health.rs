use axum::{routing::get, Router};

use crate::constants::LIVENESS_MESSAGE;
use crate::service::HospitalService;

pub fn router() -> Router<HospitalService> {
    Router::new().route("/", get(liveness))
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
