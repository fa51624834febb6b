use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProvisionDatabaseRequestResource {
    /// Name of both the database and its owning login role. Trimmed and lowercased before
    /// it is checked against `^[a-z][a-z0-9_]{0,62}$`.
    pub name: String,

    #[validate(length(min = 8))]
    pub password: String,
}
