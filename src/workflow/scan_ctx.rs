//! 文件扫描上下文
//!
//! 封装"我正在处理第几个文件"这一信息

use std::fmt::Display;

/// 文件扫描上下文
///
/// 包含处理单个文件所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct ScanCtx {
    /// 图片文件路径
    pub path: String,

    /// 文件在批次中的序号（从1开始，仅用于日志显示）
    pub file_index: usize,
}

impl ScanCtx {
    /// 创建新的扫描上下文
    pub fn new(path: String, file_index: usize) -> Self {
        Self { path, file_index }
    }
}

impl Display for ScanCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件#{} 路径#{}]", self.file_index, self.path)
    }
}
