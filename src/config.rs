use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 查重报告保存路径（.txt 或 .docx）
    pub report_file: Option<String>,
    /// 比较结果 JSON 导出路径
    pub json_file: Option<String>,
    /// 输出日志文件
    pub log_file: Option<String>,
    /// 是否逐条记录重复/相似题目
    pub verbose_logging: bool,
}

impl Config {
    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let path_str = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::config(&path_str, e))?;
        toml::from_str(&content).map_err(|e| AppError::config(&path_str, e))
    }

    /// 用环境变量覆盖配置
    pub fn with_env(self) -> Self {
        Self::merge_env(self, |key| std::env::var(key).ok())
    }

    fn merge_env(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            report_file: lookup("REPORT_FILE").or(self.report_file),
            json_file: lookup("JSON_FILE").or(self.json_file),
            log_file: lookup("LOG_FILE").or(self.log_file),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dedup.toml");
        std::fs::write(&path, "report_file = \"out.docx\"\nverbose_logging = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.report_file.as_deref(), Some("out.docx"));
        assert!(config.verbose_logging);
        assert_eq!(config.json_file, None);
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "verbose_logging = \"maybe\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            [("LOG_FILE", "run.log"), ("VERBOSE_LOGGING", "not-a-bool")].into();
        let base = Config {
            report_file: Some("a.txt".to_string()),
            verbose_logging: true,
            ..Default::default()
        };

        let config = base.merge_env(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.report_file.as_deref(), Some("a.txt"));
        assert_eq!(config.log_file.as_deref(), Some("run.log"));
        // 无法解析的值保留原配置
        assert!(config.verbose_logging);
    }
}
