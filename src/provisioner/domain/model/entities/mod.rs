pub mod provisioning_report;
