use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TeardownStep {
    TerminateConnections,
    DropDatabase,
    DropUser,
}

impl TeardownStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TerminateConnections => "terminate_connections",
            Self::DropDatabase => "drop_database",
            Self::DropUser => "drop_user",
        }
    }
}

impl fmt::Display for TeardownStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
