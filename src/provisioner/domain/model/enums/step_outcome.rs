use crate::provisioner::domain::model::{
    enums::administration_error::AdministrationError,
    value_objects::statement_effect::StatementEffect,
};

/// Classified result of one administrative statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    Success { has_effect: bool },
    AlreadyExists,
    Failure(AdministrationError),
}

impl StepOutcome {
    /// AlreadyExists is checked before success. A statement that reported no effect and no
    /// error counts as a success without effect.
    pub fn classify(result: Result<Option<StatementEffect>, AdministrationError>) -> Self {
        match result {
            Err(AdministrationError::AlreadyExists(_)) => Self::AlreadyExists,
            Ok(Some(_)) => Self::Success { has_effect: true },
            Ok(None) => Self::Success { has_effect: false },
            Err(error) => Self::Failure(error),
        }
    }
}
