use database_provisioner::provisioner::{
    domain::model::{
        commands::{
            provision_database_command::ProvisionDatabaseCommand,
            teardown_database_command::TeardownDatabaseCommand,
        },
        enums::administration_error::AdministrationError,
    },
    infrastructure::persistence::repositories::database_administration_repository::AdministrationResult,
};

pub const NAME: &str = "some_name";
pub const PASSWORD: &str = "some_password";

pub fn provision_command() -> ProvisionDatabaseCommand {
    ProvisionDatabaseCommand::new(NAME.to_string(), PASSWORD.to_string())
        .expect("valid provision command")
}

pub fn teardown_command() -> TeardownDatabaseCommand {
    TeardownDatabaseCommand::new(NAME.to_string()).expect("valid teardown command")
}

pub fn already_exists(message: &str) -> AdministrationResult {
    Err(AdministrationError::AlreadyExists(message.to_string()))
}

pub fn failed(message: &str) -> AdministrationResult {
    Err(AdministrationError::Failed(message.to_string()))
}
