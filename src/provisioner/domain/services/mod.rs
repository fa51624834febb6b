pub mod database_provisioning_command_service;
