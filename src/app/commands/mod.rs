pub mod create;
pub mod create_workflow;
pub mod deploy;
