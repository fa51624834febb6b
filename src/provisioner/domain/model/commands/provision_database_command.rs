use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::{
        database_password::DatabasePassword, database_username::DatabaseUsername,
        provisioned_database_name::ProvisionedDatabaseName,
    },
};

/// A database and a same-named login role to bring into existence.
#[derive(Clone, Debug)]
pub struct ProvisionDatabaseCommand {
    database_name: ProvisionedDatabaseName,
    username: DatabaseUsername,
    password: DatabasePassword,
}

impl ProvisionDatabaseCommand {
    pub fn new(name: String, password: String) -> Result<Self, ProvisionerDomainError> {
        let database_name = ProvisionedDatabaseName::new(name)?;
        let username = DatabaseUsername::from(&database_name);

        Ok(Self {
            database_name,
            username,
            password: DatabasePassword::new(password)?,
        })
    }

    pub fn database_name(&self) -> &ProvisionedDatabaseName {
        &self.database_name
    }

    pub fn username(&self) -> &DatabaseUsername {
        &self.username
    }

    pub fn password(&self) -> &DatabasePassword {
        &self.password
    }
}
