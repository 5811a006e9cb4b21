mod device_state;
mod request_log;

pub use device_state::{DEVICE_STATE_ID, DeviceState, DeviceStateTable};
pub use request_log::{RequestLog, RequestLogTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
