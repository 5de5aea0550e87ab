//! 上游服务回应封装
//!
//! 对已解析的回应载荷做单字段存取，不做网络请求、不做重试

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{SandhiError, SandhiResult};

/// 上游服务回应
///
/// 载荷结构：`{ "body": { "originalId": "...", ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamResponse {
    /// 回应主体字段表
    #[serde(default)]
    body: Map<String, Value>,
}

impl UpstreamResponse {
    /// 从 JSON 文本解析回应
    pub fn from_json(raw: &str) -> SandhiResult<Self> {
        let response: Self = serde_json::from_str(raw)?;
        Ok(response)
    }

    /// 取出 `originalId` 字段，原样返回
    ///
    /// # 返回
    /// - `Err(KeyNotFound)`: body 中缺少该字段（或不是字符串）
    pub fn original_id(&self) -> SandhiResult<&str> {
        self.body
            .get("originalId")
            .and_then(Value::as_str)
            .ok_or_else(|| SandhiError::KeyNotFound("originalId".to_string()))
    }
}
