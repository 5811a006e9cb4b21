mod actuator_handle;
mod dashboard_handle;
mod log_handle;
mod sensor_handle;

pub use actuator_handle::*;
pub use dashboard_handle::*;
pub use log_handle::*;
pub use sensor_handle::*;
