// ==========================================
// 库存补货决策系统 - 领域层
// ==========================================
// 职责: 实体与类型定义,不含业务规则
// ==========================================

pub mod history;
pub mod recommendation;
pub mod snapshot;
pub mod types;

pub use history::{HistoryEntry, Ledger};
pub use recommendation::Recommendation;
pub use snapshot::{ProductInfo, SnapshotRow};
pub use types::{DaysRemaining, SupplierSort, TierFilter, UrgencyTier};
