pub mod database_provisioning_workflow;
pub mod database_teardown_workflow;
