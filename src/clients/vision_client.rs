/// Vision API 客户端
///
/// 封装所有与远程 logo 检测服务相关的调用逻辑
use crate::config::Config;
use crate::error::{DetectError, DetectResult};
use crate::models::{BatchAnnotateResponse, LogoAnnotation, RpcStatus};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// 远程 logo 检测能力
///
/// 流程层只依赖这个接口，测试时可以注入替身实现。
#[async_trait]
pub trait LogoDetector: Send + Sync {
    /// 对单个本地图片文件执行 logo 检测
    async fn detect_logos(&self, path: &str) -> DetectResult<Vec<LogoAnnotation>>;
}

/// Vision API 客户端
///
/// 唯一持有 HTTP 句柄的模块，创建一次后在所有请求间复用。
pub struct VisionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    max_results: u32,
}

/// 顶层错误响应的信封（HTTP 非 2xx 时返回）
#[derive(Debug, Deserialize)]
struct TopLevelError {
    error: RpcStatus,
}

impl VisionClient {
    /// 创建新的 Vision 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.vision_api_base_url.clone(),
            api_key: config.vision_api_key.clone(),
            max_results: config.max_logo_results,
        }
    }

    /// 构建标注接口地址
    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate?key={}", self.base_url, self.api_key)
    }

    /// 读取本地图片文件
    ///
    /// 文件不存在映射为 `FileNotFound`，其余 IO 错误归入 `Unrecognized`。
    async fn read_image(&self, path: &str) -> DetectResult<Vec<u8>> {
        tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DetectError::file_not_found(path)
            } else {
                DetectError::unrecognized(e)
            }
        })
    }

    /// 将服务端状态对象归类到封闭错误枚举
    ///
    /// gRPC 状态码 7（PERMISSION_DENIED）是唯一需要单独报告的服务端错误，
    /// 顶层信封里 code 字段是 HTTP 状态码，因此同时按名称匹配。
    fn map_rpc_status(status: RpcStatus) -> DetectError {
        let rejected = status.code == Some(7)
            || status.status.as_deref() == Some("PERMISSION_DENIED");

        if rejected {
            DetectError::service_rejected(status.message.unwrap_or_default())
        } else {
            DetectError::unrecognized(anyhow::anyhow!(
                "服务端返回未识别状态: code={:?}, status={:?}, message={:?}",
                status.code,
                status.status,
                status.message
            ))
        }
    }
}

#[async_trait]
impl LogoDetector for VisionClient {
    async fn detect_logos(&self, path: &str) -> DetectResult<Vec<LogoAnnotation>> {
        debug!("读取图片文件: {}", path);
        let image_bytes = self.read_image(path).await?;
        let base64_image = general_purpose::STANDARD.encode(&image_bytes);

        let request_body = json!({
            "requests": [
                {
                    "image": { "content": base64_image },
                    "features": [
                        { "type": "LOGO_DETECTION", "maxResults": self.max_results }
                    ]
                }
            ]
        });

        debug!("正在调用 Vision API: {}", path);

        let response = self
            .http
            .post(self.annotate_url())
            .json(&request_body)
            .send()
            .await?;

        // HTTP 层错误：解析顶层状态对象后归类
        if !response.status().is_success() {
            let http_status = response.status();
            let body = response.text().await?;
            debug!("Vision API 错误响应 ({}): {}", http_status, body);

            return match serde_json::from_str::<TopLevelError>(&body) {
                Ok(envelope) => Err(Self::map_rpc_status(envelope.error)),
                Err(_) => Err(DetectError::unrecognized(anyhow::anyhow!(
                    "Vision API 请求失败: HTTP {}",
                    http_status
                ))),
            };
        }

        let batch: BatchAnnotateResponse = response.json().await?;

        let image_response = batch
            .into_first_response()
            .ok_or_else(|| DetectError::unrecognized(anyhow::anyhow!("服务端返回空响应")))?;

        // 单张图片级别的错误与标注结果互斥
        if let Some(status) = image_response.error {
            return Err(Self::map_rpc_status(status));
        }

        debug!(
            "Vision API 调用成功: {} 个 logo ({})",
            image_response.logo_annotations.len(),
            path
        );

        Ok(image_response.logo_annotations)
    }
}
