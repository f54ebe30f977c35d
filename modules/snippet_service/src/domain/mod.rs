//! Domain layer - service, repository contract and request rules

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{Direction, EntityRepository, SortOrder};
pub use service::EntityService;
