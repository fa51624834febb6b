pub mod error_response_resource;
pub mod provision_database_request_resource;
pub mod provisioning_report_resource;
