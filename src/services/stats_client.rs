use anyhow::Context;
use async_trait::async_trait;

use crate::models::StatsPayload;

/// 读取服务自身的 stats API
#[async_trait]
pub trait StatsClient: Send + Sync {
    async fn fetch(&self, url: &str) -> StatsPayload;
}

/// 基于 reqwest 的实现：单次 GET，不重试，不缓存
pub struct HttpStatsClient {
    client: reqwest::Client,
}

impl HttpStatsClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn get_body(&self, url: &str) -> anyhow::Result<String> {
        // 非 2xx 的响应同样按文本处理
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        response
            .text()
            .await
            .with_context(|| format!("failed to read the reply from {}", url))
    }
}

impl Default for HttpStatsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsClient for HttpStatsClient {
    async fn fetch(&self, url: &str) -> StatsPayload {
        let body = match self.get_body(url).await {
            Ok(body) => body,
            Err(e) => {
                // 连接失败按空响应处理
                log::warn!("Failed to get the stats from {}: {:#}", url, e);
                String::new()
            }
        };

        StatsPayload::decode(&body)
    }
}
