//! Manhua Hub Core
//!
//! Layered like the app around it:
//! - domain: the shelf entity, ids and errors
//! - repository: local key-value persistence with sanitization
//! - form: the create/edit wizard and its validation
//! - library: the shelf state owner and display ordering
//! - stats: summary cards

pub mod config;
pub mod domain;
pub mod repository;
pub mod form;
pub mod library;
pub mod stats;
pub mod seed;

pub use config::ShelfConfig;
pub use domain::{DomainError, DomainResult, Entity, IdSource, ManhuaItem};
pub use form::{FormMode, FormOutcome, FormRow, FormStep, RowField, ShelfForm, ShelfFormError};
pub use library::{display_order, Shelf};
pub use repository::{CollectionRepository, KeyValueStore, ManhuaRepository, MemoryStore};
pub use stats::{compute_stats, StatItem};
