pub mod administration_error;
pub mod provisioner_domain_error;
pub mod provisioning_step;
pub mod step_disposition;
pub mod step_outcome;
pub mod teardown_step;
pub mod workflow_result;
