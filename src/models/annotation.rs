use serde::{Deserialize, Serialize};

/// 单个检测到的 logo 记录
///
/// 服务端返回的描述和置信度都可能缺失，两个字段均为可选。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoAnnotation {
    /// logo 的可读名称
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 置信度，范围 [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl LogoAnnotation {
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self {
            description: Some(description.into()),
            score: Some(score),
        }
    }
}

impl Default for LogoAnnotation {
    fn default() -> Self {
        Self {
            description: None,
            score: None,
        }
    }
}

/// 服务端状态对象（google.rpc.Status）
///
/// `code` 是 gRPC 状态码（7 表示拒绝），`status` 是对应的名称字符串。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcStatus {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// 单张图片的标注响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateImageResponse {
    #[serde(rename = "logoAnnotations", default)]
    pub logo_annotations: Vec<LogoAnnotation>,

    /// 单张图片级别的错误，与标注结果互斥
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcStatus>,
}

/// 批量标注响应的外层信封
///
/// 每个请求条目对应 `responses` 中的一个条目，顺序一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

impl BatchAnnotateResponse {
    /// 取出第一张图片的响应（单图请求场景）
    pub fn into_first_response(self) -> Option<AnnotateImageResponse> {
        self.responses.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_annotations() {
        let raw = r#"{
            "responses": [
                {
                    "logoAnnotations": [
                        { "mid": "/m/045c7b", "description": "Google", "score": 0.98 },
                        { "description": "Shell" }
                    ]
                }
            ]
        }"#;

        let parsed: BatchAnnotateResponse = serde_json::from_str(raw).unwrap();
        let response = parsed.into_first_response().unwrap();
        assert_eq!(response.logo_annotations.len(), 2);
        assert_eq!(
            response.logo_annotations[0].description.as_deref(),
            Some("Google")
        );
        assert!(response.logo_annotations[1].score.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_deserialize_image_error() {
        let raw = r#"{
            "responses": [
                {
                    "error": {
                        "code": 7,
                        "message": "Requests to this API are blocked.",
                        "status": "PERMISSION_DENIED"
                    }
                }
            ]
        }"#;

        let parsed: BatchAnnotateResponse = serde_json::from_str(raw).unwrap();
        let response = parsed.into_first_response().unwrap();
        assert!(response.logo_annotations.is_empty());
        assert_eq!(response.error.unwrap().code, Some(7));
    }

    #[test]
    fn test_deserialize_empty_response() {
        // 未检测到 logo 时服务端省略 logoAnnotations 字段
        let raw = r#"{ "responses": [ {} ] }"#;
        let parsed: BatchAnnotateResponse = serde_json::from_str(raw).unwrap();
        let response = parsed.into_first_response().unwrap();
        assert!(response.logo_annotations.is_empty());
    }
}
