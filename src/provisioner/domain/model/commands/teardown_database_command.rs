use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::{
        database_username::DatabaseUsername, provisioned_database_name::ProvisionedDatabaseName,
    },
};

#[derive(Clone, Debug)]
pub struct TeardownDatabaseCommand {
    database_name: ProvisionedDatabaseName,
    username: DatabaseUsername,
}

impl TeardownDatabaseCommand {
    pub fn new(name: String) -> Result<Self, ProvisionerDomainError> {
        let database_name = ProvisionedDatabaseName::new(name)?;
        let username = DatabaseUsername::from(&database_name);

        Ok(Self {
            database_name,
            username,
        })
    }

    pub fn database_name(&self) -> &ProvisionedDatabaseName {
        &self.database_name
    }

    pub fn username(&self) -> &DatabaseUsername {
        &self.username
    }
}
