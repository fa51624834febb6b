use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::{
    enums::{provisioning_step::ProvisioningStep, step_disposition::StepDisposition},
    value_objects::{
        provisioned_database_name::ProvisionedDatabaseName,
        provisioning_run_id::ProvisioningRunId,
    },
};

#[derive(Clone, Debug)]
pub struct ProvisioningReport {
    run_id: ProvisioningRunId,
    database_name: ProvisionedDatabaseName,
    user_created: bool,
    steps: Vec<(ProvisioningStep, StepDisposition)>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl ProvisioningReport {
    pub fn start(
        run_id: ProvisioningRunId,
        database_name: ProvisionedDatabaseName,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            run_id,
            database_name,
            user_created: false,
            steps: Vec::with_capacity(4),
            started_at,
            finished_at: None,
        }
    }

    pub fn record(&mut self, step: ProvisioningStep, disposition: StepDisposition) {
        self.steps.push((step, disposition));
    }

    pub fn set_user_created(&mut self, user_created: bool) {
        self.user_created = user_created;
    }

    pub fn finish(mut self, finished_at: DateTime<Utc>) -> Self {
        self.finished_at = Some(finished_at);
        self
    }

    pub fn run_id(&self) -> ProvisioningRunId {
        self.run_id
    }

    pub fn database_name(&self) -> &ProvisionedDatabaseName {
        &self.database_name
    }

    pub fn user_created(&self) -> bool {
        self.user_created
    }

    pub fn steps(&self) -> &[(ProvisioningStep, StepDisposition)] {
        &self.steps
    }

    pub fn disposition_of(&self, step: ProvisioningStep) -> Option<StepDisposition> {
        self.steps
            .iter()
            .find(|(recorded, _)| *recorded == step)
            .map(|(_, disposition)| *disposition)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}
