use std::sync::Arc;

use crate::config::AgentConfig;
use crate::services::{
    HttpStatsClient, NetstatCounter, ServiceRegistry, StatusRouter, SystemctlProbe,
};

/// 请求之间共享的只读状态
pub type AppState = Arc<StatusRouter>;

pub fn new_state(config: &AgentConfig) -> AppState {
    Arc::new(StatusRouter::new(
        ServiceRegistry::from_config(config),
        Arc::new(SystemctlProbe::new()),
        Arc::new(NetstatCounter::new()),
        Arc::new(HttpStatsClient::new()),
    ))
}
