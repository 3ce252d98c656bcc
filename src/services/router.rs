use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::models::{ServiceDescriptor, StatusResult};
use crate::services::{ProcessProbe, ServiceRegistry, SocketCounter, StatsClient};

pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
pub const AGENT_STATUS_ROUTE: &str = "/status";

/// 把请求路径分派到对应服务并组装响应
pub struct StatusRouter {
    registry: ServiceRegistry,
    probe: Arc<dyn ProcessProbe>,
    sockets: Arc<dyn SocketCounter>,
    stats: Arc<dyn StatsClient>,
}

impl StatusRouter {
    pub fn new(
        registry: ServiceRegistry,
        probe: Arc<dyn ProcessProbe>,
        sockets: Arc<dyn SocketCounter>,
        stats: Arc<dyn StatsClient>,
    ) -> Self {
        Self {
            registry,
            probe,
            sockets,
            stats,
        }
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// 不检查 method；任何内部失败都已转换成值，总会返回一个 JSON 文档
    pub async fn handle(&self, method: &str, raw_path: &str) -> Value {
        log::debug!("{} {}", method, raw_path);

        if self.registry.normalize(raw_path) == AGENT_STATUS_ROUTE {
            return Value::Object(self.agent_status());
        }

        match self.registry.resolve(raw_path) {
            Some(service) => Value::Object(self.check(service).await.into_document()),
            None => not_found(),
        }
    }

    pub async fn check(&self, service: &ServiceDescriptor) -> StatusResult {
        let state = self.probe.probe(&service.supervisor_unit).await;
        let mut result = StatusResult::new(&service.name, state);

        if let Some(port) = service.connections_port {
            let connections = self.sockets.count(port).await;
            result.insert_extra("connections", json!(connections));
        }

        if let Some(url) = service.stats_url.as_deref().filter(|u| !u.is_empty()) {
            let payload = self.stats.fetch(url).await;
            result.insert_extra("API_stats", payload.into_value());
        }

        result
    }

    /// 每个已注册服务的主路由都经过与请求相同的解析，能解析到自身即为 available
    fn agent_status(&self) -> Map<String, Value> {
        let mut endpoints = Map::new();
        for service in self.registry.services() {
            let available = self
                .registry
                .resolve(service.primary_route())
                .is_some_and(|resolved| resolved.name == service.name);
            let availability = if available { "available" } else { "not available" };
            endpoints.insert(service.name.clone(), json!(availability));
        }

        let mut document = Map::new();
        document.insert("agent_status".to_string(), json!("running"));
        document.insert("endpoints".to_string(), Value::Object(endpoints));
        // 以下为附加字段
        document.insert("agent_version".to_string(), json!(env!("CARGO_PKG_VERSION")));
        document.insert(
            "hostname".to_string(),
            json!(sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string())),
        );
        document.insert("uptime_seconds".to_string(), json!(sysinfo::System::uptime()));
        document
    }
}

pub fn not_found() -> Value {
    json!({ "error": NOT_FOUND_MESSAGE })
}
