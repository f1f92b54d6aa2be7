use coral_client::ClientConfig;
use shared::models::TableLocation;

use crate::{FloorError, FloorResult};

/// 楼面配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | API_BASE_URL | http://localhost:5012 | 餐厅 API 地址 |
/// | REFERENCE_BASE_URL | (API_BASE_URL) | 桌台/商品基础数据地址 |
/// | PUSH_ADDR | - | 推送通道 TCP 地址，不设置则不连接 |
/// | REQUEST_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | DEFAULT_LOCATION | inside | 启动时显示的区域 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志格式 |
/// | LOG_DIR | - | 日志文件目录，不设置则只输出到控制台 |
#[derive(Debug, Clone)]
pub struct FloorConfig {
    pub api_base_url: String,
    pub reference_base_url: Option<String>,
    pub push_addr: Option<String>,
    pub request_timeout_secs: u64,
    pub default_location: TableLocation,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl FloorConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> FloorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FloorResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let default_location = match get("DEFAULT_LOCATION") {
            Some(raw) => raw
                .parse()
                .map_err(|e| FloorError::Config(format!("DEFAULT_LOCATION: {}", e)))?,
            None => TableLocation::Inside,
        };

        let request_timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                FloorError::Config(format!("REQUEST_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => 30,
        };

        Ok(Self {
            api_base_url: get("API_BASE_URL").unwrap_or_else(|| "http://localhost:5012".into()),
            reference_base_url: get("REFERENCE_BASE_URL"),
            push_addr: get("PUSH_ADDR"),
            request_timeout_secs,
            default_location,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: get("LOG_JSON")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_dir: get("LOG_DIR"),
        })
    }

    /// Client configuration for the HTTP and push clients
    pub fn client_config(&self) -> ClientConfig {
        let mut config =
            ClientConfig::new(&self.api_base_url).with_timeout(self.request_timeout_secs);
        if let Some(url) = &self.reference_base_url {
            config = config.with_reference_url(url);
        }
        if let Some(addr) = &self.push_addr {
            config = config.with_push_addr(addr);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FloorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5012");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.default_location, TableLocation::Inside);
        assert!(!config.log_json);
        assert!(config.push_addr.is_none());

        let client = config.client_config();
        assert_eq!(client.reference_base(), "http://localhost:5012");
        assert_eq!(client.timeout, 30);
    }

    #[test]
    fn test_overrides() {
        let config = FloorConfig::from_lookup(lookup(&[
            ("API_BASE_URL", "http://pos.local:5012"),
            ("REFERENCE_BASE_URL", "http://ref.local"),
            ("PUSH_ADDR", "10.0.0.2:5013"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("DEFAULT_LOCATION", "Outside"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", " "),
        ]))
        .unwrap();

        assert_eq!(config.default_location, TableLocation::Outside);
        assert!(config.log_json);
        assert!(config.log_dir.is_none());

        let client = config.client_config();
        assert_eq!(client.base_url, "http://pos.local:5012");
        assert_eq!(client.reference_base(), "http://ref.local");
        assert_eq!(client.push_addr.as_deref(), Some("10.0.0.2:5013"));
        assert_eq!(client.timeout, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = FloorConfig::from_lookup(lookup(&[("DEFAULT_LOCATION", "roof")])).unwrap_err();
        assert!(matches!(err, FloorError::Config(_)));

        let err = FloorConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, FloorError::Config(_)));
    }
}
