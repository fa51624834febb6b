pub mod sqlx_database_administration_connector_impl;
pub mod sqlx_database_administration_repository_impl;
