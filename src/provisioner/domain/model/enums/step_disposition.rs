/// How a step ended in a run that completed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepDisposition {
    Applied,
    AppliedWithoutEffect,
    AlreadyExisted,
    Skipped,
}

impl StepDisposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::AppliedWithoutEffect => "applied_without_effect",
            Self::AlreadyExisted => "already_existed",
            Self::Skipped => "skipped",
        }
    }
}
