/// What an administrative statement reported back when it succeeded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatementEffect {
    rows_affected: u64,
}

impl StatementEffect {
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }

    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }
}
