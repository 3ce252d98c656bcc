use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// 各服务对应的 systemd unit 名称
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnitNames {
    pub nginx: String,
    pub prosody: String,
    pub jicofo: String,
    pub jvb: String,
    pub jibri: String,
}

impl Default for UnitNames {
    fn default() -> Self {
        Self {
            nginx: "nginx".to_string(),
            prosody: "prosody".to_string(),
            jicofo: "jicofo".to_string(),
            jvb: "jitsi-videobridge2".to_string(),
            jibri: "jibri".to_string(),
        }
    }
}

/// Agent 配置，启动时加载一次
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub agent_port: u16,
    pub bind_address: String,
    /// 挂载在子路径下时的入口脚本名，如 `/index.php/nginx`
    pub script_name: String,
    /// 同时配置证书和私钥时以 HTTPS 监听
    pub ssl_cert: Option<String>,
    pub ssl_key: Option<String>,
    pub nginx_port: u16,
    pub jicofo_stats_url: Option<String>,
    pub jvb_stats_url: Option<String>,
    pub jibri_health_url: Option<String>,
    pub units: UnitNames,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            // 避开 80, 443, 8080 和 8888
            agent_port: 8081,
            bind_address: "0.0.0.0".to_string(),
            script_name: "index.php".to_string(),
            ssl_cert: None,
            ssl_key: None,
            nginx_port: 80,
            jicofo_stats_url: None,
            jvb_stats_url: None,
            jibri_health_url: None,
            units: UnitNames::default(),
        }
    }
}

impl AgentConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // 空文件等同于全部默认值
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid agent configuration")
    }

    /// 证书与私钥都非空时返回两者路径
    pub fn tls_paths(&self) -> Option<(&Path, &Path)> {
        let cert = self.ssl_cert.as_deref().map(str::trim).filter(|p| !p.is_empty())?;
        let key = self.ssl_key.as_deref().map(str::trim).filter(|p| !p.is_empty())?;
        Some((Path::new(cert), Path::new(key)))
    }

    /// 文件不存在时使用默认值；文件存在但无法解析则返回错误
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::warn!(
                "Config file {} not found, using default values",
                path.display()
            );
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_yaml(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
