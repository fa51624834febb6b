pub mod database_administration_connector;
pub mod database_administration_repository;
pub mod postgres;
