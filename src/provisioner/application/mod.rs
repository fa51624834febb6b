pub mod command_services;
pub mod workflows;
