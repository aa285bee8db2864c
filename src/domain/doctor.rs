//! Doctor domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Doctor domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Doctor {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Doctor's name
    #[serde(rename = "nome")]
    #[schema(example = "Ana")]
    pub name: String,
    /// Medical specialty
    #[serde(rename = "especialidade")]
    #[schema(example = "Cardiologia")]
    pub specialty: String,
}

/// Fields a client may supply when creating or replacing a doctor.
///
/// Any `id` in the request body is ignored; identifiers belong to the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct DoctorInput {
    /// Doctor's name
    #[serde(rename = "nome")]
    #[schema(example = "Ana")]
    pub name: String,
    /// Medical specialty
    #[serde(rename = "especialidade")]
    #[schema(example = "Cardiologia")]
    pub specialty: String,
}

impl DoctorInput {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_serializes_wire_names() {
        let doctor = Doctor {
            id: 1,
            name: "Ana".to_string(),
            specialty: "Cardiologia".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&doctor).unwrap(),
            serde_json::json!({ "id": 1, "nome": "Ana", "especialidade": "Cardiologia" })
        );
    }

    #[test]
    fn test_input_ignores_id() {
        let input: DoctorInput = serde_json::from_str(
            r#"{"id": 42, "nome": "Ana", "especialidade": "Cardiologia"}"#,
        )
        .unwrap();

        assert_eq!(input, DoctorInput::new("Ana", "Cardiologia"));
    }

    #[test]
    fn test_input_requires_both_fields() {
        let result = serde_json::from_str::<DoctorInput>(r#"{"nome": "Ana"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        let result =
            serde_json::from_str::<DoctorInput>(r#"{"nome": 5, "especialidade": "Cardiologia"}"#);
        assert!(result.is_err());
    }
}
