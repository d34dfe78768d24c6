//! 批量文件扫描器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文件的扫描调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建 Vision 客户端和扫描流程
//! 2. **顺序调度**：逐个文件发起请求，上一个完全结束后再开始下一个
//! 3. **错误隔离**：单个文件失败不会中断批次
//! 4. **全局统计**：汇总所有文件的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文件的细节
//! - **资源所有者**：唯一持有 ScanFlow（进而持有 VisionClient）的模块
//! - **向下委托**：委托 workflow::ScanFlow 处理单个文件

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::VisionClient;
use crate::config::Config;
use crate::utils::logging;
use crate::workflow::{ScanCtx, ScanFlow, ScanOutcome};

/// 应用主结构
pub struct App {
    config: Config,
    flow: ScanFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(config.image_paths.len());

        // 创建 Vision 客户端（持有 HTTP 句柄，整个批次复用）
        let client = VisionClient::new(&config);
        let flow = ScanFlow::new(Arc::new(client));

        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        if self.config.image_paths.is_empty() {
            warn!("⚠️ 没有待扫描的图片文件，程序结束");
            return Ok(());
        }

        // 扫描所有文件
        let stats = scan_batch(&self.flow, &self.config.image_paths).await;

        // 输出最终统计
        logging::print_final_stats(stats.success, stats.failed, stats.total);

        Ok(())
    }
}

/// 批量扫描统计
#[derive(Debug, Default)]
pub struct ScanStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 顺序扫描一批文件
///
/// 严格顺序执行：上一个文件的请求完全结束（成功或失败）后，
/// 才会发起下一个请求。单个文件失败不会中断批次。
pub async fn scan_batch(flow: &ScanFlow, paths: &[String]) -> ScanStats {
    let mut stats = ScanStats {
        total: paths.len(),
        ..Default::default()
    };

    for (idx, path) in paths.iter().enumerate() {
        let ctx = ScanCtx::new(path.clone(), idx + 1);
        info!(
            "[文件 {}/{}] 🔍 开始扫描: {}",
            ctx.file_index,
            stats.total,
            ctx.path
        );

        match flow.run(&ctx).await {
            ScanOutcome::Completed => stats.success += 1,
            ScanOutcome::Failed => stats.failed += 1,
        }
    }

    stats
}
