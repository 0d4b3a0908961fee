// ==========================================
// 库存补货决策系统 - 发注分级引擎
// ==========================================
// 职责: 剩余天数计算 + 紧急等级判定 + 建议订货量计算
// 输入: 日均销量 + 当前库存 + 运行配置
// 输出: Assessment (剩余天数, 紧急等级, 订货量)
// ==========================================
// 红线: 等级判定只看数值剩余天数,展示层重判也走同一入口
// ==========================================

use crate::config::Settings;
use crate::domain::types::{DaysRemaining, UrgencyTier};

// ==========================================
// Assessment - 分级结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub days_remaining: DaysRemaining,
    pub urgency_tier: UrgencyTier,
    pub order_quantity: i64,
}

// ==========================================
// ReorderClassifier - 发注分级引擎
// ==========================================
pub struct ReorderClassifier;

impl ReorderClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 对单商品做发注分级
    ///
    /// 规则:
    /// - 日均销量 ≤ 0 → 剩余天数无实绩,等级 NoData
    /// - 否则剩余天数 = 库存 / 日均销量
    /// - 订货量 = max(0, ceil(日均销量 × 目标覆盖天数 − 库存)),
    ///   无实绩时该式非正,自然得 0
    pub fn classify(
        &self,
        avg_daily_sales: f64,
        current_stock: i64,
        settings: &Settings,
    ) -> Assessment {
        let days_remaining = if avg_daily_sales > 0.0 {
            DaysRemaining::Days(current_stock as f64 / avg_daily_sales)
        } else {
            DaysRemaining::NoData
        };

        let urgency_tier = self.tier_for(days_remaining, settings);

        let order_quantity = (avg_daily_sales * settings.target_coverage_days as f64
            - current_stock as f64)
            .ceil()
            .max(0.0) as i64;

        Assessment {
            days_remaining,
            urgency_tier,
            order_quantity,
        }
    }

    /// 由数值剩余天数判定紧急等级
    ///
    /// 展示层重新显示既有数据时也必须经由此方法重判,
    /// 保证等级与当前阈值始终一致,不信任任何已渲染标签
    ///
    /// 判定顺序（向零取整后比较,7.9 天不落入 7 天档）:
    /// 1. 无实绩 → NoData
    /// 2. floor(剩余天数) ≤ 供货周期 → Urgent
    /// 3. floor(剩余天数) ≤ 复核阈值 → Review
    /// 4. 其余 → Sufficient
    pub fn tier_for(&self, days_remaining: DaysRemaining, settings: &Settings) -> UrgencyTier {
        let floor_days = match days_remaining.floor_days() {
            Some(d) => d,
            None => return UrgencyTier::NoData,
        };

        if floor_days <= settings.lead_time_days as i64 {
            UrgencyTier::Urgent
        } else if floor_days <= settings.review_threshold_days as i64 {
            UrgencyTier::Review
        } else {
            UrgencyTier::Sufficient
        }
    }
}

impl Default for ReorderClassifier {
    fn default() -> Self {
        Self::new()
    }
}
