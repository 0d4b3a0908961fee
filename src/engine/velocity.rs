// ==========================================
// 库存补货决策系统 - 流速估算引擎
// ==========================================
// 职责: 由商品履历序列估算日均销量
// 输入: 单商品 HistoryEntry 序列（允许乱序,内部排序）
// 输出: Some(日均销量) | None（数据不足）
// ==========================================
// 补货修正: 库存上升的日子不是销售日,
// 从分母中剔除,否则会稀释真实流速
// ==========================================

use crate::domain::history::HistoryEntry;

// ==========================================
// VelocityEstimator - 流速估算引擎
// ==========================================
pub struct VelocityEstimator;

impl VelocityEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 估算日均销量
    ///
    /// 规则:
    /// - 少于 2 条记录 → None,调用方跳过该商品
    /// - 首条记录无前日基准,不计入销量合计
    /// - 补货日（库存较前一条上升）计数,从分母剔除
    /// - 跨度按首末日期的日历天数计算,快照缺日造成的空档不补
    /// - 有效天数 ≤ 0 时按 1 计,避免除零与负流速
    pub fn estimate(&self, entries: &[HistoryEntry]) -> Option<f64> {
        if entries.len() < 2 {
            return None;
        }

        // 台账不保证顺序,估算前必须排序
        let mut sorted: Vec<&HistoryEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.date);

        let first = sorted[0];
        let last = sorted[sorted.len() - 1];
        let total_span_days = (last.date - first.date).num_days();

        let mut total_sales: i64 = 0;
        let mut replenishment_days: i64 = 0;
        for pair in sorted.windows(2) {
            total_sales += pair[1].sales_quantity;
            if pair[1].stock_level > pair[0].stock_level {
                replenishment_days += 1;
            }
        }

        let mut effective_days = total_span_days - replenishment_days;
        if effective_days <= 0 {
            effective_days = 1;
        }

        Some(total_sales as f64 / effective_days as f64)
    }
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self::new()
    }
}
