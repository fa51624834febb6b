use thiserror::Error;

use crate::provisioner::domain::model::enums::{
    administration_error::AdministrationError, provisioning_step::ProvisioningStep,
    teardown_step::TeardownStep,
};

#[derive(Debug, Error)]
pub enum ProvisionerDomainError {
    #[error("database name is invalid; use [a-z][a-z0-9_] and length 1..63")]
    InvalidDatabaseName,

    #[error("database password is invalid; it must not contain NUL bytes")]
    InvalidDatabasePassword,

    #[error("could not open administrative connection: {0}")]
    AdministrationConnectionFailed(String),

    #[error("provisioning failed at {step}: {source}")]
    ProvisioningStepFailed {
        step: ProvisioningStep,
        #[source]
        source: AdministrationError,
    },

    #[error("teardown failed at {step}: {source}")]
    TeardownStepFailed {
        step: TeardownStep,
        #[source]
        source: AdministrationError,
    },
}
