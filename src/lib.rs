// ==========================================
// 库存补货决策系统 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel 导入 + CSV 台账
// 系统定位: 决策支持系统 (单操作员批运行,人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 运行配置
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 存储层 - 台账与建议表文件
pub mod repository;

// 展示层 - 建议表渲染
pub mod presenter;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DaysRemaining, SupplierSort, TierFilter, UrgencyTier};

// 领域实体
pub use domain::{HistoryEntry, Ledger, ProductInfo, Recommendation, SnapshotRow};

// 配置
pub use config::Settings;

// 引擎
pub use engine::{
    LedgerMaintainer, ReorderClassifier, ReorderOrchestrator, VelocityEstimator,
};

// 导入与存储
pub use importer::SnapshotImporter;
pub use repository::{LedgerRepository, RecommendationRepository};

// 展示
pub use presenter::ViewState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存补货决策系统";
