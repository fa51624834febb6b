use regex::Regex;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

lazy_static::lazy_static! {
    static ref DATABASE_IDENTIFIER_REGEX: Regex =
        Regex::new(r"^[a-z][a-z0-9_]{0,62}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProvisionedDatabaseName(String);

impl ProvisionedDatabaseName {
    pub fn new(value: String) -> Result<Self, ProvisionerDomainError> {
        let normalized = value.trim().to_lowercase();

        if !DATABASE_IDENTIFIER_REGEX.is_match(&normalized) {
            return Err(ProvisionerDomainError::InvalidDatabaseName);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Double-quoted form, safe to splice into DDL.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}
