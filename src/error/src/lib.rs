//! 模拟器错误处理模块
//!
//! 规则运算本身从不失败；这里只覆盖边界上的错误：配置文件读取与解析。

use thiserror::Error;

/// 模拟器边界上可能出现的错误类型
#[derive(Debug, Error)]
pub enum SimError {
    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件解析错误
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 配置值无效
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// 将错误转换为用户友好的消息
pub fn handle_error(error: &SimError) -> String {
    match error {
        SimError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "config file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "no permission to read config file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        SimError::ConfigParse(e) => format!("malformed config: {}", e.message()),
        SimError::InvalidConfig(msg) => format!("invalid config: {}", msg),
    }
}
