//! 文件扫描流程 - 流程层
//!
//! 核心职责：定义"一个文件"的完整处理流程
//!
//! 流程顺序：
//! 1. 输出扫描提示行
//! 2. 调用远程检测服务
//! 3. 成功 → 输出描述行和平均置信度行
//! 4. 失败 → 按错误类别输出（文件缺失 / 服务端拒绝 / 静默）

use std::sync::Arc;

use tracing::{debug, info};

use crate::clients::LogoDetector;
use crate::services::ScanReporter;
use crate::workflow::scan_ctx::ScanCtx;

/// 文件扫描结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// 扫描完成，报告已输出
    Completed,
    /// 扫描失败（错误已按类别处理）
    Failed,
}

/// 文件扫描流程
///
/// - 编排单个文件的完整扫描流程
/// - 不持有任何资源（HTTP 句柄在客户端层）
/// - 检测能力通过 `LogoDetector` 注入，测试时可替换为替身
/// - 错误在本层消化，永远不会向上传播中断批次
pub struct ScanFlow {
    detector: Arc<dyn LogoDetector>,
    reporter: ScanReporter,
}

impl ScanFlow {
    /// 创建新的文件扫描流程
    pub fn new(detector: Arc<dyn LogoDetector>) -> Self {
        Self {
            detector,
            reporter: ScanReporter::new(),
        }
    }

    /// 执行单个文件的扫描流程
    pub async fn run(&self, ctx: &ScanCtx) -> ScanOutcome {
        println!("Running logo detection on {}", ctx.path);

        match self.detector.detect_logos(&ctx.path).await {
            Ok(annotations) => {
                info!(
                    "[文件 {}] ✓ 检测完成，找到 {} 个 logo",
                    ctx.file_index,
                    annotations.len()
                );
                self.reporter.print_success(&ctx.path, &annotations);
                ScanOutcome::Completed
            }
            Err(err) => {
                // 错误行（若有）由报告服务按类别输出，这里只留调试痕迹
                debug!("[文件 {}] 检测未完成: {}", ctx.file_index, err);
                self.reporter.print_error(&ctx.path, &err);
                ScanOutcome::Failed
            }
        }
    }
}
