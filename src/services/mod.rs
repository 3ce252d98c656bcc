pub mod process_probe;
pub mod registry;
pub mod router;
pub mod socket_counter;
pub mod stats_client;

pub use process_probe::{ProcessProbe, SystemctlProbe};
pub use registry::ServiceRegistry;
pub use router::StatusRouter;
pub use socket_counter::{NetstatCounter, SocketCounter};
pub use stats_client::{HttpStatsClient, StatsClient};
