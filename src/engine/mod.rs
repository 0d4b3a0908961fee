// ==========================================
// 库存补货决策系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎,不做文件解析
// 红线: 分级只看数值剩余天数;台账重写必须原子
// ==========================================

pub mod classifier;
pub mod ledger;
pub mod orchestrator;
pub mod velocity;

// 重导出核心引擎
pub use classifier::{Assessment, ReorderClassifier};
pub use ledger::{LedgerMaintainer, MergeOutcome};
pub use orchestrator::{ReorderOrchestrator, RunResult, RunSummary};
pub use velocity::VelocityEstimator;
