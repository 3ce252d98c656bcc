use serde_json::{json, Map, Value};

use crate::models::service::ServiceState;

pub const DECODE_ERROR_MESSAGE: &str = "Failed to decode the JSON reply from the service.";

/// stats API 的返回内容
#[derive(Debug, Clone, PartialEq)]
pub enum StatsPayload {
    /// 成功解析的 JSON，保持原始字段顺序
    Decoded(Value),
    /// 响应无法解析为 JSON
    DecodeError,
}

impl StatsPayload {
    /// 解析响应文本；空内容、HTML 错误页等都会得到 `DecodeError`
    pub fn decode(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => StatsPayload::Decoded(value),
            Err(_) => StatsPayload::DecodeError,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            StatsPayload::Decoded(value) => value,
            StatsPayload::DecodeError => json!({ "error": DECODE_ERROR_MESSAGE }),
        }
    }
}

/// 单次请求的检查结果，响应发送后即丢弃
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResult {
    pub service_name: String,
    pub state: ServiceState,
    /// 附加字段（key 为后缀，如 `connections`、`API_stats`），按插入顺序输出
    pub extra: Map<String, Value>,
}

impl StatusResult {
    pub fn new(service_name: &str, state: ServiceState) -> Self {
        Self {
            service_name: service_name.to_string(),
            state,
            extra: Map::new(),
        }
    }

    pub fn insert_extra(&mut self, suffix: &str, value: Value) {
        self.extra.insert(suffix.to_string(), value);
    }

    /// 展开成扁平的响应字段：`<service>_status` 在前，附加字段依次在后
    pub fn into_document(self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert(
            format!("{}_status", self.service_name),
            Value::from(self.state.as_str()),
        );
        for (suffix, value) in self.extra {
            document.insert(format!("{}_{}", self.service_name, suffix), value);
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_key_order() {
        let payload = StatsPayload::decode(r#"{"zeta": 1, "alpha": 2, "mid": {"b": 1, "a": 2}}"#);
        let value = payload.into_value();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        let inner: Vec<_> = value["mid"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(inner, vec!["b", "a"]);
    }

    #[test]
    fn test_decode_accepts_non_object_json() {
        assert_eq!(StatsPayload::decode("[1, 2]"), StatsPayload::Decoded(json!([1, 2])));
        assert_eq!(StatsPayload::decode("42"), StatsPayload::Decoded(json!(42)));
    }

    #[test]
    fn test_decode_failures_become_error_marker() {
        for body in ["", "not json", "<html>error</html>", "{\"open\": "] {
            assert_eq!(StatsPayload::decode(body), StatsPayload::DecodeError, "body: {:?}", body);
        }
        assert_eq!(
            StatsPayload::DecodeError.into_value(),
            json!({ "error": "Failed to decode the JSON reply from the service." })
        );
    }

    #[test]
    fn test_document_key_order() {
        let mut result = StatusResult::new("nginx", ServiceState::Running);
        result.insert_extra("connections", json!(3));

        let document = result.into_document();
        let keys: Vec<_> = document.keys().cloned().collect();
        assert_eq!(keys, vec!["nginx_status", "nginx_connections"]);
        assert_eq!(document["nginx_status"], "running");
    }
}
