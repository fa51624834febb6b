use crate::provisioner::domain::model::value_objects::provisioned_database_name::ProvisionedDatabaseName;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseUsername(String);

impl DatabaseUsername {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

// The provisioned role always carries the database's name.
impl From<&ProvisionedDatabaseName> for DatabaseUsername {
    fn from(database_name: &ProvisionedDatabaseName) -> Self {
        Self(database_name.value().to_string())
    }
}
