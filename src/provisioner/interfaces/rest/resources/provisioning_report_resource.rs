use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::provisioner::domain::model::{
    entities::provisioning_report::ProvisioningReport,
    value_objects::database_username::DatabaseUsername,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProvisioningStepResource {
    pub step: String,
    pub disposition: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProvisioningReportResource {
    pub run_id: String,
    pub database_name: String,
    pub username: String,
    pub user_created: bool,
    pub steps: Vec<ProvisioningStepResource>,
    pub started_at: String,
    pub finished_at: Option<String>,
}

impl From<&ProvisioningReport> for ProvisioningReportResource {
    fn from(report: &ProvisioningReport) -> Self {
        Self {
            run_id: report.run_id().to_string(),
            database_name: report.database_name().value().to_string(),
            username: DatabaseUsername::from(report.database_name())
                .value()
                .to_string(),
            user_created: report.user_created(),
            steps: report
                .steps()
                .iter()
                .map(|(step, disposition)| ProvisioningStepResource {
                    step: step.as_str().to_string(),
                    disposition: disposition.as_str().to_string(),
                })
                .collect(),
            started_at: report.started_at().to_rfc3339(),
            finished_at: report.finished_at().map(|at| at.to_rfc3339()),
        }
    }
}
