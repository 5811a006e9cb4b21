mod audit_service;
mod log_service;

pub use audit_service::*;
pub use log_service::*;
