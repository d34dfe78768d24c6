//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_scanner (处理 Vec<path>)
//!     ↓
//! workflow::ScanFlow (处理单个文件)
//!     ↓
//! services (能力层：report)
//!     ↓
//! clients (客户端层：VisionClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：只做调度和统计，不做具体业务判断
//! 2. **资源隔离**：只有编排层持有 ScanFlow
//! 3. **顺序执行**：一次只有一个在途请求，无并发协调

pub mod batch_scanner;

// 重新导出主要类型
pub use batch_scanner::{scan_batch, App, ScanStats};
