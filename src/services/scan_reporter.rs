//! 扫描报告服务 - 业务能力层
//!
//! 只负责"渲染并输出一个文件的报告"能力，不关心流程

use crate::error::DetectError;
use crate::models::LogoAnnotation;
use tracing::debug;

/// 扫描报告服务
///
/// 职责：
/// - 将单个文件的标注结果渲染为报告行
/// - 计算并渲染平均置信度
/// - 按错误类别渲染错误行
/// - 只处理单个文件的结果
/// - 不关心流程顺序
///
/// 报告行走标准输出，错误行走标准错误，与日志流互不混杂。
pub struct ScanReporter;

impl ScanReporter {
    /// 创建新的扫描报告服务
    pub fn new() -> Self {
        Self
    }

    /// 渲染描述行
    ///
    /// 每个带有非空描述的标注对应一行，顺序与服务端返回一致。
    pub fn description_lines(&self, path: &str, annotations: &[LogoAnnotation]) -> Vec<String> {
        annotations
            .iter()
            .filter_map(|logo| logo.description.as_deref())
            .filter(|desc| !desc.is_empty())
            .map(|desc| format!("\"{}\" found in in file {}", desc, path))
            .collect()
    }

    /// 渲染平均置信度行
    ///
    /// 收集所有存在的置信度；列表为空时不输出平均行。
    pub fn average_line(&self, path: &str, annotations: &[LogoAnnotation]) -> Option<String> {
        let scores: Vec<f32> = annotations.iter().filter_map(|logo| logo.score).collect();

        if scores.is_empty() {
            return None;
        }

        let average = scores.iter().sum::<f32>() / scores.len() as f32;
        Some(format!("Average score for {}: {:.2}", path, average))
    }

    /// 渲染错误行
    ///
    /// - 文件不存在 → "not found" 行
    /// - 服务端拒绝 → 服务端说明文字
    /// - 其他错误 → 不输出（仅留 debug 级日志）
    pub fn error_line(&self, path: &str, err: &DetectError) -> Option<String> {
        match err {
            DetectError::FileNotFound { .. } => Some(format!("File {} not found", path)),
            DetectError::ServiceRejected { details } => Some(details.clone()),
            DetectError::Unrecognized { source } => {
                debug!("[{}] 忽略未识别的错误: {}", path, source);
                None
            }
        }
    }

    /// 输出成功报告
    pub fn print_success(&self, path: &str, annotations: &[LogoAnnotation]) {
        for line in self.description_lines(path, annotations) {
            println!("{}", line);
        }
        if let Some(line) = self.average_line(path, annotations) {
            println!("{}", line);
        }
    }

    /// 输出错误报告
    pub fn print_error(&self, path: &str, err: &DetectError) {
        if let Some(line) = self.error_line(path, err) {
            eprintln!("{}", line);
        }
    }
}

impl Default for ScanReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetectError;

    #[test]
    fn test_description_lines_and_average() {
        let reporter = ScanReporter::new();
        let annotations = vec![
            LogoAnnotation::new("A", 0.9),
            LogoAnnotation::new("B", 0.7),
        ];

        let lines = reporter.description_lines("./images/cmu.jpg", &annotations);
        assert_eq!(
            lines,
            vec![
                "\"A\" found in in file ./images/cmu.jpg",
                "\"B\" found in in file ./images/cmu.jpg",
            ]
        );

        let average = reporter.average_line("./images/cmu.jpg", &annotations);
        assert_eq!(
            average.as_deref(),
            Some("Average score for ./images/cmu.jpg: 0.80")
        );
    }

    #[test]
    fn test_empty_annotations_produce_no_lines() {
        let reporter = ScanReporter::new();

        assert!(reporter.description_lines("./a.jpg", &[]).is_empty());
        // 没有置信度时不输出平均行
        assert_eq!(reporter.average_line("./a.jpg", &[]), None);
    }

    #[test]
    fn test_missing_fields_are_skipped_independently() {
        let reporter = ScanReporter::new();
        let annotations = vec![
            // 只有描述，没有置信度
            LogoAnnotation {
                description: Some("Shell".to_string()),
                score: None,
            },
            // 只有置信度，没有描述
            LogoAnnotation {
                description: None,
                score: Some(0.5),
            },
        ];

        let lines = reporter.description_lines("./a.jpg", &annotations);
        assert_eq!(lines, vec!["\"Shell\" found in in file ./a.jpg"]);

        let average = reporter.average_line("./a.jpg", &annotations);
        assert_eq!(average.as_deref(), Some("Average score for ./a.jpg: 0.50"));
    }

    #[test]
    fn test_error_line_file_not_found() {
        let reporter = ScanReporter::new();
        let err = DetectError::file_not_found("./images/not-a-file.jpg");

        assert_eq!(
            reporter.error_line("./images/not-a-file.jpg", &err).as_deref(),
            Some("File ./images/not-a-file.jpg not found")
        );
    }

    #[test]
    fn test_error_line_service_rejected_prints_details_only() {
        let reporter = ScanReporter::new();
        let err = DetectError::service_rejected(
            "Requests to this API method are blocked.",
        );

        assert_eq!(
            reporter.error_line("./a.jpg", &err).as_deref(),
            Some("Requests to this API method are blocked.")
        );
    }

    #[test]
    fn test_error_line_unrecognized_is_silent() {
        let reporter = ScanReporter::new();
        let err = DetectError::unrecognized(anyhow::anyhow!("connection reset"));

        assert_eq!(reporter.error_line("./a.jpg", &err), None);
    }
}
