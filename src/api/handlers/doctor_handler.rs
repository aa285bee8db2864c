//! Doctor handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use axum_extra::extract::WithRejection;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::DOCTOR_NOT_FOUND;
use crate::domain::{Doctor, DoctorInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::Acknowledgement;

/// Doctor id taken from the URL, rejected as `422` when not an integer
type DoctorId = WithRejection<Path<i64>, AppError>;

/// Ids outside the column's range cannot name a stored doctor.
fn stored_id(id: i64) -> AppResult<i32> {
    i32::try_from(id).ok().ok_or_not_found(DOCTOR_NOT_FOUND)
}

/// Create doctor routes
pub fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/medicos", get(list_doctors).post(create_doctor))
        .route("/medicos/:id", put(update_doctor).delete(delete_doctor))
}

/// List all doctors
#[utoipa::path(
    get,
    path = "/medicos",
    tag = "Doctors",
    responses(
        (status = 200, description = "Every stored doctor", body = Vec<Doctor>)
    )
)]
pub async fn list_doctors(State(state): State<AppState>) -> AppResult<Json<Vec<Doctor>>> {
    let doctors = state.doctors.list().await?;
    Ok(Json(doctors))
}

/// Register a new doctor
#[utoipa::path(
    post,
    path = "/medicos",
    tag = "Doctors",
    request_body = DoctorInput,
    responses(
        (status = 200, description = "Doctor created with its assigned id", body = Doctor),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<DoctorInput>,
) -> AppResult<Json<Doctor>> {
    let doctor = state.doctors.create(input).await?;
    Ok(Json(doctor))
}

/// Replace name and specialty of a doctor
#[utoipa::path(
    put,
    path = "/medicos/{id}",
    tag = "Doctors",
    params(
        ("id" = i64, Path, description = "Doctor ID")
    ),
    request_body = DoctorInput,
    responses(
        (status = 200, description = "Doctor updated", body = Doctor),
        (status = 404, description = "Doctor not found"),
        (status = 422, description = "Malformed id or request body")
    )
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    WithRejection(Path(id), _): DoctorId,
    JsonBody(input): JsonBody<DoctorInput>,
) -> AppResult<Json<Doctor>> {
    let doctor = state
        .doctors
        .update_by_id(stored_id(id)?, input)
        .await?
        .ok_or_not_found(DOCTOR_NOT_FOUND)?;

    Ok(Json(doctor))
}

/// Remove a doctor
#[utoipa::path(
    delete,
    path = "/medicos/{id}",
    tag = "Doctors",
    params(
        ("id" = i64, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor deleted", body = Acknowledgement),
        (status = 404, description = "Doctor not found"),
        (status = 422, description = "Malformed id")
    )
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    WithRejection(Path(id), _): DoctorId,
) -> AppResult<Json<Acknowledgement>> {
    if !state.doctors.delete_by_id(stored_id(id)?).await? {
        return Err(AppError::not_found(DOCTOR_NOT_FOUND));
    }

    Ok(Json(Acknowledgement::ok()))
}
