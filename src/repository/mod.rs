// ==========================================
// 库存补货决策系统 - 存储层
// ==========================================
// 职责: 台账与建议表的文件存取
// 红线: 台账替换必须原子,失败时旧文件保持原样
// ==========================================

pub mod error;
pub mod ledger_repo;
pub mod recommendation_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use ledger_repo::LedgerRepository;
pub use recommendation_repo::RecommendationRepository;
