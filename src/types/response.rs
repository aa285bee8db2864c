use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement payload for operations without a resource to return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Acknowledgement {
    #[schema(example = true)]
    pub ok: bool,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
