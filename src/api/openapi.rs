//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/openapi.json` with Swagger UI at `/docs`.

use utoipa::OpenApi;

use crate::api::handlers::doctor_handler;
use crate::domain::{Doctor, DoctorInput};
use crate::types::Acknowledgement;

/// OpenAPI documentation for the doctor registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doctor Registry",
        version = "0.1.0",
        description = "CRUD over doctor records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://127.0.0.1:8000", description = "Local development server")
    ),
    paths(
        doctor_handler::list_doctors,
        doctor_handler::create_doctor,
        doctor_handler::update_doctor,
        doctor_handler::delete_doctor,
    ),
    components(
        schemas(Doctor, DoctorInput, Acknowledgement)
    ),
    tags(
        (name = "Doctors", description = "Doctor record management")
    )
)]
pub struct ApiDoc;
