use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入的试卷数量不足
    #[error("请至少选择2个文件进行比较 (当前: {count})")]
    InsufficientInput { count: usize },

    /// 读取或解析文档失败
    #[error("无法读取文档 ({path}): {reason}")]
    DocumentRead { path: String, reason: String },

    /// 报告保存失败
    #[error("保存报告失败 ({path}): {reason}")]
    ReportWrite { path: String, reason: String },

    /// 配置错误
    #[error("配置错误 ({path}): {reason}")]
    Config { path: String, reason: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文档读取错误
    pub fn document_read(path: impl Into<String>, reason: impl ToString) -> Self {
        AppError::DocumentRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// 创建报告写入错误
    pub fn report_write(path: impl Into<String>, reason: impl ToString) -> Self {
        AppError::ReportWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// 创建配置错误
    pub fn config(path: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
