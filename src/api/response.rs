use serde_json::Value;

const SERIALIZE_FALLBACK: &str = "{\n  \"error\": \"Failed to serialize the response.\"\n}\n";

/// 统一输出：两空格缩进，保持插入顺序，末尾一个换行
pub fn serialize(document: &Value) -> String {
    match serde_json::to_string_pretty(document) {
        Ok(mut text) => {
            text.push('\n');
            text
        }
        Err(e) => {
            log::error!("Failed to serialize the response: {}", e);
            SERIALIZE_FALLBACK.to_string()
        }
    }
}
