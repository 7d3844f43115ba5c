use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::{json, Value};

use crate::constants::{API_NAME, HOSPITAL_ADDED_MESSAGE, HOSPITAL_UPDATED_MESSAGE};
use crate::error::AppError;
use crate::models::{Hospital, HospitalUpdate, NewHospital};
use crate::service::HospitalService;

pub fn router() -> Router<HospitalService> {
    Router::new()
        .route("/", get(list_hospitals).post(create_hospital))
        .route("/{id}", put(update_hospital))
}

async fn create_hospital(
    State(service): State<HospitalService>,
    payload: Result<Json<NewHospital>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(input) = payload?;
    tracing::info!(
        "{} Received create request for: {}",
        API_NAME,
        input.hospital_name.as_ref().unwrap_or(&serde_json::Value::Null)
    );

    let hospital = service.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": HOSPITAL_ADDED_MESSAGE,
            "hospital": hospital
        })),
    ))
}

async fn list_hospitals(
    State(service): State<HospitalService>,
) -> Result<Json<Vec<Hospital>>, AppError> {
    let hospitals = service.list_all().await?;
    Ok(Json(hospitals))
}

async fn update_hospital(
    State(service): State<HospitalService>,
    Path(id): Path<String>,
    payload: Result<Json<HospitalUpdate>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(update) = payload?;
    service.update(&id, update).await?;

    Ok(Json(json!({
        "message": HOSPITAL_UPDATED_MESSAGE
    })))
}
