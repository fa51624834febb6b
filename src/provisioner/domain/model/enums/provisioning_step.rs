use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProvisioningStep {
    CreateDatabase,
    CreateUser,
    AssignPassword,
    GrantPrivileges,
}

impl ProvisioningStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDatabase => "create_database",
            Self::CreateUser => "create_user",
            Self::AssignPassword => "assign_password",
            Self::GrantPrivileges => "grant_privileges",
        }
    }
}

impl fmt::Display for ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
