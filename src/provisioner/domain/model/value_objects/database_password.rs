use std::fmt;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

#[derive(Clone, Eq, PartialEq)]
pub struct DatabasePassword(String);

impl DatabasePassword {
    pub fn new(value: String) -> Result<Self, ProvisionerDomainError> {
        // Postgres string literals cannot carry NUL.
        if value.contains('\0') {
            return Err(ProvisionerDomainError::InvalidDatabasePassword);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Single-quoted SQL string literal with embedded quotes doubled.
    pub fn escaped_literal(&self) -> String {
        format!("'{}'", self.0.replace('\'', "''"))
    }
}

impl fmt::Debug for DatabasePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DatabasePassword(***)")
    }
}
