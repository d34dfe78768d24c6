//! # Logo Detect Batch
//!
//! 一个用于批量识别图片 logo 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有稀缺资源（HTTP 句柄），只暴露能力
//! - `VisionClient` - 唯一的远程服务调用者，提供 logo 检测能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文件的结果
//! - `ScanReporter` - 报告渲染与输出能力（描述行 + 平均分行）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文件"的完整处理流程
//! - `ScanCtx` - 上下文封装（文件路径 + 文件序号）
//! - `ScanFlow` - 流程编排（检测 → 报告 / 按错误类别处理）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_scanner` - 批量文件扫描器，顺序遍历并统计
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{LogoDetector, VisionClient};
pub use config::Config;
pub use error::{DetectError, DetectResult};
pub use models::LogoAnnotation;
pub use orchestrator::{scan_batch, App, ScanStats};
pub use services::ScanReporter;
pub use workflow::{ScanCtx, ScanFlow, ScanOutcome};
