mod audit_middleware;

pub use audit_middleware::*;
