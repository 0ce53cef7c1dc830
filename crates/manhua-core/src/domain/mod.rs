//! Domain Layer
//!
//! Contains the shelf entity and core abstractions.

mod entity;
mod manhua;
mod ids;

pub use entity::{Entity, DomainError, DomainResult};
pub use manhua::{
    ManhuaItem, STATUS_MANUAL, STATUS_IMPORTED, DESCRIPTION_LIMIT, name_key, cap_description,
};
pub use ids::{IdSource, SequentialIds};
