use crate::provisioner::domain::model::{
    entities::provisioning_report::ProvisioningReport,
    enums::{administration_error::AdministrationError, provisioning_step::ProvisioningStep},
};

/// Terminal outcome of one provisioning run.
#[derive(Clone, Debug)]
pub enum WorkflowResult {
    Ok(ProvisioningReport),
    Failed {
        error: AdministrationError,
        step: ProvisioningStep,
    },
}

impl WorkflowResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn failed_step(&self) -> Option<ProvisioningStep> {
        match self {
            Self::Ok(_) => None,
            Self::Failed { step, .. } => Some(*step),
        }
    }
}
