use crate::config::AgentConfig;
use crate::models::ServiceDescriptor;

/// 路由名 -> 服务描述的静态表
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    script_name: String,
    services: Vec<ServiceDescriptor>,
}

impl ServiceRegistry {
    /// `script_name` 只保留文件名部分，`/index.php` 与 `index.php` 等价
    pub fn new(script_name: &str, services: Vec<ServiceDescriptor>) -> Self {
        Self {
            script_name: script_name.trim_matches('/').to_string(),
            services,
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        let units = &config.units;
        let services = vec![
            ServiceDescriptor::new("nginx", &units.nginx)
                .with_alias("/nginx/status")
                .with_connections_port(config.nginx_port),
            ServiceDescriptor::new("prosody", &units.prosody),
            ServiceDescriptor::new("jicofo", &units.jicofo)
                .with_stats_url(config.jicofo_stats_url.as_deref()),
            ServiceDescriptor::new("jvb", &units.jvb)
                .with_alias("/jvb/status")
                .with_stats_url(config.jvb_stats_url.as_deref()),
            ServiceDescriptor::new("jibri", &units.jibri)
                .with_stats_url(config.jibri_health_url.as_deref()),
        ];

        Self::new(&config.script_name, services)
    }

    /// 去掉 `/<script_name>` 前缀后的路径
    pub fn normalize<'a>(&self, path: &'a str) -> &'a str {
        normalize_path(path, &self.script_name)
    }

    pub fn resolve(&self, path: &str) -> Option<&ServiceDescriptor> {
        let path = self.normalize(path);
        self.services.iter().find(|service| service.matches(path))
    }

    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.services
    }
}

/// 支持挂载在根路径或 `/<script_name>/` 子路径下
pub fn normalize_path<'a>(path: &'a str, script_name: &str) -> &'a str {
    if script_name.is_empty() {
        return path;
    }

    path.strip_prefix('/')
        .and_then(|rest| rest.strip_prefix(script_name))
        .filter(|rest| rest.starts_with('/'))
        .unwrap_or(path)
}
