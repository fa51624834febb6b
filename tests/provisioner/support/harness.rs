use std::sync::Arc;

use database_provisioner::provisioner::application::command_services::database_provisioning_command_service_impl::DatabaseProvisioningCommandServiceImpl;

use super::fakes::{FakeDatabaseAdministrationConnector, FakeDatabaseAdministrationRepository};

pub struct ProvisioningTestHarness {
    pub repository: FakeDatabaseAdministrationRepository,
    pub connector: Arc<FakeDatabaseAdministrationConnector>,
    pub service: DatabaseProvisioningCommandServiceImpl,
}

pub fn create_harness(
    repository: FakeDatabaseAdministrationRepository,
    open_should_fail: bool,
) -> ProvisioningTestHarness {
    let connector = Arc::new(FakeDatabaseAdministrationConnector::new(
        repository.clone(),
        open_should_fail,
    ));

    let service = DatabaseProvisioningCommandServiceImpl::new(connector.clone());

    ProvisioningTestHarness {
        repository,
        connector,
        service,
    }
}
