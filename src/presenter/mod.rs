// ==========================================
// 库存补货决策系统 - 展示层
// ==========================================
// 职责: 建议表的筛选/检索/排序/汇总与格式化,纯函数渲染
// ==========================================

pub mod table;
pub mod view_state;

pub use table::{render, render_text, RenderedRow, TableView, TierSummary};
pub use view_state::ViewState;
