pub mod provision_database_command;
pub mod teardown_database_command;
