pub mod service;
pub mod status;

pub use service::{ServiceDescriptor, ServiceState};
pub use status::{StatsPayload, StatusResult};
