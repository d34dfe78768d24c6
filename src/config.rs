/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// Vision API 基础地址
    pub vision_api_base_url: String,
    /// Vision API 密钥
    pub vision_api_key: String,
    /// 单张图片最多返回的 logo 数量
    pub max_logo_results: u32,
    /// 待扫描的图片文件列表
    pub image_paths: Vec<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vision_api_base_url: "https://vision.googleapis.com".to_string(),
            vision_api_key: String::new(),
            max_logo_results: 10,
            image_paths: vec![
                "./images/cmu.jpg".to_string(),
                "./images/logo-types-collection.jpg".to_string(),
                "./images/not-a-file.jpg".to_string(),
            ],
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            vision_api_base_url: std::env::var("VISION_API_BASE_URL").unwrap_or(default.vision_api_base_url),
            vision_api_key: std::env::var("VISION_API_KEY").unwrap_or(default.vision_api_key),
            max_logo_results: std::env::var("MAX_LOGO_RESULTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_logo_results),
            image_paths: std::env::var("IMAGE_PATHS").map(parse_image_paths).unwrap_or(default.image_paths),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

/// 解析逗号分隔的图片路径列表
fn parse_image_paths(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_paths() {
        let config = Config::default();
        assert_eq!(config.image_paths.len(), 3);
        assert_eq!(config.image_paths[0], "./images/cmu.jpg");
    }

    #[test]
    fn test_parse_image_paths() {
        let paths = parse_image_paths("./a.jpg, ./b.jpg,,./c.jpg".to_string());
        assert_eq!(paths, vec!["./a.jpg", "./b.jpg", "./c.jpg"]);
    }
}
