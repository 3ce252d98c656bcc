/// 被监控服务的静态描述，启动时由配置生成，运行期间不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// 服务名称，同时作为响应字段的前缀（如 `nginx_status`）
    pub name: String,
    /// 可接受的请求路径（精确匹配）
    pub route_aliases: Vec<String>,
    /// systemd unit 名称
    pub supervisor_unit: String,
    /// 需要统计连接数的端口，仅 nginx 有
    pub connections_port: Option<u16>,
    /// 服务自身的 stats API 地址
    pub stats_url: Option<String>,
}

impl ServiceDescriptor {
    pub fn new(name: &str, supervisor_unit: &str) -> Self {
        Self {
            name: name.to_string(),
            route_aliases: vec![format!("/{}", name)],
            supervisor_unit: supervisor_unit.to_string(),
            connections_port: None,
            stats_url: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.route_aliases.push(alias.to_string());
        self
    }

    pub fn with_connections_port(mut self, port: u16) -> Self {
        self.connections_port = Some(port);
        self
    }

    /// 空字符串视为未配置
    pub fn with_stats_url(mut self, url: Option<&str>) -> Self {
        self.stats_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        self
    }

    /// 主路由（第一个别名）
    pub fn primary_route(&self) -> &str {
        &self.route_aliases[0]
    }

    pub fn matches(&self, path: &str) -> bool {
        self.route_aliases.iter().any(|alias| alias == path)
    }
}

/// 进程管理器报告的服务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Running,
    NotRunning,
}

impl ServiceState {
    /// 只有 `active` 表示运行中，其余输出（包括空）一律视为未运行
    pub fn from_supervisor_output(output: &str) -> Self {
        if output.trim() == "active" {
            ServiceState::Running
        } else {
            ServiceState::NotRunning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceState::Running => "running",
            ServiceState::NotRunning => "not running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supervisor_output_mapping() {
        assert_eq!(ServiceState::from_supervisor_output("active"), ServiceState::Running);
        assert_eq!(ServiceState::from_supervisor_output("active\n"), ServiceState::Running);
        assert_eq!(ServiceState::from_supervisor_output(""), ServiceState::NotRunning);
        assert_eq!(ServiceState::from_supervisor_output("inactive"), ServiceState::NotRunning);
        assert_eq!(ServiceState::from_supervisor_output("activating"), ServiceState::NotRunning);
        assert_eq!(ServiceState::from_supervisor_output("Active"), ServiceState::NotRunning);
    }

    #[test]
    fn test_state_as_text() {
        assert_eq!(ServiceState::Running.as_str(), "running");
        assert_eq!(ServiceState::NotRunning.as_str(), "not running");
    }

    #[test]
    fn test_empty_stats_url_is_not_configured() {
        let jvb = ServiceDescriptor::new("jvb", "jitsi-videobridge2").with_stats_url(Some("  "));
        assert_eq!(jvb.stats_url, None);

        let jvb = jvb.with_stats_url(Some("http://localhost:8080/colibri/stats"));
        assert_eq!(jvb.stats_url.as_deref(), Some("http://localhost:8080/colibri/stats"));
    }

    #[test]
    fn test_alias_matching_is_exact() {
        let nginx = ServiceDescriptor::new("nginx", "nginx").with_alias("/nginx/status");
        assert!(nginx.matches("/nginx"));
        assert!(nginx.matches("/nginx/status"));
        assert!(!nginx.matches("/nginx/"));
        assert!(!nginx.matches("/NGINX"));
        assert_eq!(nginx.primary_route(), "/nginx");
    }
}
