pub mod schema;
pub mod settings;
pub mod storage;

pub use schema::SchemaManager;
pub use settings::{Database, Device, Logger, Server, Settings, Simulation};
pub use storage::Storage;
