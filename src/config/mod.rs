// ==========================================
// 库存补货决策系统 - 配置层
// ==========================================

pub mod settings;

pub use settings::Settings;
