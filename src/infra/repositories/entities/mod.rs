//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod doctor;

pub use doctor::{ActiveModel as DoctorActiveModel, Entity as DoctorEntity};
