#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{already_exists, failed, provision_command, teardown_command};
pub use harness::create_harness;
