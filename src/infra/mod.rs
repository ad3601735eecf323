pub mod factory;
pub mod fixtures;
pub mod repositories;
