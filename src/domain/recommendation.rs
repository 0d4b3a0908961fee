// ==========================================
// 库存补货决策系统 - 发注建议领域模型
// ==========================================
// 派生只读数据,每次运行整体重算、整体替换,不做增量更新
// ==========================================

use crate::domain::types::{DaysRemaining, UrgencyTier};
use serde::{Deserialize, Serialize};

// ==========================================
// Recommendation - 单商品发注建议行
// ==========================================
// 列顺序即导出顺序: 供应商在前,便于按供应商分单下发
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub supplier: String,             // 供应商名称
    pub product_code: String,         // 商品编码
    pub product_name: String,         // 商品名称
    pub stock_level: i64,             // 当前库存数
    pub avg_daily_sales: f64,         // 日均销量（剔除补货日后的估算值）
    pub days_remaining: DaysRemaining, // 预计剩余天数（带无实绩标记）
    pub order_quantity: i64,          // 建议订货数（补足目标覆盖天数,恒 ≥ 0）
    pub urgency_tier: UrgencyTier,    // 紧急等级
}
