use tracing::info;
/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化日志订阅器
///
/// 默认级别 info，可通过 RUST_LOG 覆盖。
/// 日志走标准错误，报告输出走标准输出，两者互不混杂。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `total_files`: 待扫描文件总数
pub fn log_startup(total_files: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量 logo 扫描模式");
    info!("📊 待扫描文件数: {}", total_files);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部扫描完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}
