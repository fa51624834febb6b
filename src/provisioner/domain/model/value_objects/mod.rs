pub mod database_password;
pub mod database_username;
pub mod provisioned_database_name;
pub mod provisioning_run_id;
pub mod statement_effect;
