//! JSON body extractor - Typed request bodies with uniform rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections render as [`AppError::Validation`].
///
/// Missing fields, wrong JSON types, malformed syntax and a wrong content type
/// all surface as `422` with a `detail` message instead of axum's plain-text
/// rejection.
///
/// # Example
///
/// ```rust,ignore
/// use doctor_registry::api::extractors::JsonBody;
/// use doctor_registry::domain::DoctorInput;
///
/// async fn create_doctor(JsonBody(input): JsonBody<DoctorInput>) {
///     // input already has the expected shape
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(JsonBody(value))
    }
}
