// ==========================================
// 库存补货决策系统 - 存储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 文件错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 处理失败: {0}")]
    CsvError(String),

    // ===== 原子替换错误 =====
    // 替换未完成时旧文件保持原样,调用方据此上报运行失败
    #[error("台账原子替换失败: {0}")]
    AtomicReplaceError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        RepositoryError::CsvError(err.to_string())
    }
}

// 实现 From<tempfile::PersistError>
impl From<tempfile::PersistError> for RepositoryError {
    fn from(err: tempfile::PersistError) -> Self {
        RepositoryError::AtomicReplaceError(err.to_string())
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
