mod device_state;
mod request_log;

pub use device_state::DeviceStateRepository;
pub use request_log::RequestLogRepository;
