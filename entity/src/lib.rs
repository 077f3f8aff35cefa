//! SeaORM entities for the container booking schema.

pub mod prelude;

pub mod container;
pub mod user;
