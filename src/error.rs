use std::fmt;

/// 远程检测服务错误类型（封闭枚举）
///
/// 所有来自远程调用的错误都由客户端层归类到这三种情况之一，
/// 下游逻辑只需要穷尽匹配，不需要探测底层的错误码。
#[derive(Debug)]
pub enum DetectError {
    /// 本地图片文件不存在
    FileNotFound {
        path: String,
    },
    /// 服务端拒绝请求（gRPC 状态码 7），附带服务端说明文字
    ServiceRejected {
        details: String,
    },
    /// 其他未识别的错误（传输层、解析层等），按策略静默处理
    Unrecognized {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::FileNotFound { path } => write!(f, "文件不存在: {}", path),
            DetectError::ServiceRejected { details } => {
                write!(f, "服务端拒绝请求: {}", details)
            }
            DetectError::Unrecognized { source } => write!(f, "未识别的错误: {}", source),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::Unrecognized { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<DetectError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<reqwest::Error> for DetectError {
    fn from(err: reqwest::Error) -> Self {
        DetectError::Unrecognized {
            source: Box::new(err),
        }
    }
}

impl From<serde_json::Error> for DetectError {
    fn from(err: serde_json::Error) -> Self {
        DetectError::Unrecognized {
            source: Box::new(err),
        }
    }
}

// ========== 便捷构造函数 ==========

impl DetectError {
    /// 创建文件不存在错误
    pub fn file_not_found(path: impl Into<String>) -> Self {
        DetectError::FileNotFound { path: path.into() }
    }

    /// 创建服务端拒绝错误
    pub fn service_rejected(details: impl Into<String>) -> Self {
        DetectError::ServiceRejected {
            details: details.into(),
        }
    }

    /// 创建未识别错误
    pub fn unrecognized(
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DetectError::Unrecognized {
            source: source.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 检测结果类型
pub type DetectResult<T> = Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_file_not_found() {
        let err = DetectError::file_not_found("./images/not-a-file.jpg");
        assert_eq!(err.to_string(), "文件不存在: ./images/not-a-file.jpg");
    }

    #[test]
    fn test_unrecognized_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DetectError::unrecognized(io_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
