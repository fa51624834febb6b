use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::{
    config::app_config::AppConfig,
    provisioner::{
        domain::model::enums::provisioner_domain_error::ProvisionerDomainError,
        infrastructure::persistence::repositories::{
            database_administration_connector::DatabaseAdministrationConnector,
            database_administration_repository::DatabaseAdministrationRepository,
            postgres::sqlx_database_administration_repository_impl::SqlxDatabaseAdministrationRepositoryImpl,
        },
    },
};

pub struct SqlxDatabaseAdministrationConnectorImpl {
    connect_options: PgConnectOptions,
    connect_timeout: Duration,
}

impl SqlxDatabaseAdministrationConnectorImpl {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            connect_options: config.admin_connect_options(),
            connect_timeout: config.postgres_connect_timeout,
        }
    }
}

#[async_trait]
impl DatabaseAdministrationConnector for SqlxDatabaseAdministrationConnectorImpl {
    async fn open(&self) -> Result<Box<dyn DatabaseAdministrationRepository>, ProvisionerDomainError> {
        // One session per run; statements never overlap.
        let admin_pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(self.connect_timeout)
            .connect_with(self.connect_options.clone())
            .await
            .map_err(|e| ProvisionerDomainError::AdministrationConnectionFailed(e.to_string()))?;

        tracing::debug!(
            host = self.connect_options.get_host(),
            port = self.connect_options.get_port(),
            "opened administrative session"
        );

        Ok(Box::new(SqlxDatabaseAdministrationRepositoryImpl::new(
            admin_pool,
        )))
    }
}
