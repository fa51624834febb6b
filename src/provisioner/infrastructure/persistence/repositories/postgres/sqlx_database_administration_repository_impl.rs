use async_trait::async_trait;
use sqlx::{Executor, PgPool};

use crate::provisioner::{
    domain::model::{
        enums::administration_error::AdministrationError,
        value_objects::{
            database_password::DatabasePassword, database_username::DatabaseUsername,
            provisioned_database_name::ProvisionedDatabaseName,
            statement_effect::StatementEffect,
        },
    },
    infrastructure::persistence::repositories::database_administration_repository::{
        AdministrationResult, DatabaseAdministrationRepository,
    },
};

// SQLSTATE duplicate_database / duplicate_object
const DUPLICATE_DATABASE: &str = "42P04";
const DUPLICATE_OBJECT: &str = "42710";

pub struct SqlxDatabaseAdministrationRepositoryImpl {
    admin_pool: PgPool,
}

impl SqlxDatabaseAdministrationRepositoryImpl {
    pub fn new(admin_pool: PgPool) -> Self {
        Self { admin_pool }
    }

    // DDL has no parameters, so it goes over the simple query protocol outside any
    // transaction block; CREATE/DROP DATABASE refuse to run inside one.
    async fn run_statement(&self, statement: &str) -> AdministrationResult {
        let result = self
            .admin_pool
            .execute(statement)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Some(StatementEffect::new(result.rows_affected())))
    }

    pub fn create_database_statement(database_name: &ProvisionedDatabaseName) -> String {
        format!("CREATE DATABASE {}", database_name.quoted())
    }

    pub fn create_user_statement(username: &DatabaseUsername) -> String {
        format!("CREATE USER {}", username.quoted())
    }

    pub fn assign_password_statement(
        username: &DatabaseUsername,
        password: &DatabasePassword,
    ) -> String {
        format!(
            "ALTER ROLE {} WITH PASSWORD {}",
            username.quoted(),
            password.escaped_literal()
        )
    }

    pub fn grant_privileges_statement(
        database_name: &ProvisionedDatabaseName,
        username: &DatabaseUsername,
    ) -> String {
        format!(
            "GRANT ALL PRIVILEGES ON DATABASE {} TO {}",
            database_name.quoted(),
            username.quoted()
        )
    }

    pub fn drop_database_statement(database_name: &ProvisionedDatabaseName) -> String {
        format!("DROP DATABASE IF EXISTS {}", database_name.quoted())
    }

    pub fn drop_user_statement(username: &DatabaseUsername) -> String {
        format!("DROP USER IF EXISTS {}", username.quoted())
    }
}

#[async_trait]
impl DatabaseAdministrationRepository for SqlxDatabaseAdministrationRepositoryImpl {
    async fn create_database(
        &self,
        database_name: &ProvisionedDatabaseName,
    ) -> AdministrationResult {
        self.run_statement(&Self::create_database_statement(database_name))
            .await
    }

    async fn create_database_user(&self, username: &DatabaseUsername) -> AdministrationResult {
        self.run_statement(&Self::create_user_statement(username))
            .await
    }

    async fn assign_password(
        &self,
        username: &DatabaseUsername,
        password: &DatabasePassword,
    ) -> AdministrationResult {
        self.run_statement(&Self::assign_password_statement(username, password))
            .await
    }

    async fn grant_privileges(
        &self,
        database_name: &ProvisionedDatabaseName,
        username: &DatabaseUsername,
    ) -> AdministrationResult {
        self.run_statement(&Self::grant_privileges_statement(database_name, username))
            .await
    }

    async fn terminate_open_connections(
        &self,
        database_name: &ProvisionedDatabaseName,
    ) -> AdministrationResult {
        let statement = r#"
            SELECT pg_terminate_backend(pid)
            FROM pg_stat_activity
            WHERE datname = $1 AND pid <> pg_backend_pid()
        "#;

        let result = sqlx::query(statement)
            .bind(database_name.value())
            .execute(&self.admin_pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Some(StatementEffect::new(result.rows_affected())))
    }

    async fn drop_database(&self, database_name: &ProvisionedDatabaseName) -> AdministrationResult {
        self.run_statement(&Self::drop_database_statement(database_name))
            .await
    }

    async fn drop_database_user(&self, username: &DatabaseUsername) -> AdministrationResult {
        self.run_statement(&Self::drop_user_statement(username))
            .await
    }

    async fn close(&self) {
        self.admin_pool.close().await;
    }
}

/// Duplicate-object SQLSTATEs become `AlreadyExists`. Errors that carry no SQLSTATE fall back
/// to the server's "already exists" wording.
pub fn map_sqlx_error(error: sqlx::Error) -> AdministrationError {
    if let sqlx::Error::Database(database_error) = &error {
        if matches!(
            database_error.code().as_deref(),
            Some(DUPLICATE_DATABASE) | Some(DUPLICATE_OBJECT)
        ) {
            return AdministrationError::AlreadyExists(database_error.message().to_string());
        }
        return AdministrationError::Failed(database_error.message().to_string());
    }

    let message = error.to_string();
    if message.contains("already exists") {
        AdministrationError::AlreadyExists(message)
    } else {
        AdministrationError::Failed(message)
    }
}
