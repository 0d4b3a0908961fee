// ==========================================
// 库存补货决策系统 - 领域类型定义
// ==========================================
// 紧急等级体系: 等级制,由剩余天数与阈值比较得出
// 红线: 分级永远以数值剩余天数为准,不得从展示标签反推
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 无实绩展示文案（导出与表格渲染共用）
pub const NO_DATA_LABEL: &str = "无实绩";

/// 旧版导出使用的哨兵值（剩余天数=999 表示无实绩）
///
/// 仅在重新读入历史导出文件时兼容识别,本系统自身不再产出该值
pub const LEGACY_NO_DATA_SENTINEL: f64 = 999.0;

// ==========================================
// 紧急等级 (Urgency Tier)
// ==========================================
// 判定顺序: 无实绩 → 紧急 → 待复核 → 充足
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    Urgent,     // 紧急订货（剩余天数 ≤ 供货周期）
    Review,     // 待复核（剩余天数 ≤ 复核阈值）
    Sufficient, // 库存充足
    NoData,     // 无实绩（销量为零或数据不足,无法估算）
}

impl UrgencyTier {
    /// 等级文案（不含标记）
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "紧急订货",
            UrgencyTier::Review => "待复核",
            UrgencyTier::Sufficient => "库存充足",
            UrgencyTier::NoData => NO_DATA_LABEL,
        }
    }

    /// 严重度标记（无实绩使用中性标记）
    pub fn marker(&self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "🔴",
            UrgencyTier::Review => "🟡",
            UrgencyTier::Sufficient => "🟢",
            UrgencyTier::NoData => "⚪",
        }
    }

    /// 展示标签: 标记 + 文案
    pub fn display_label(&self) -> String {
        format!("{} {}", self.marker(), self.label())
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyTier::Urgent => write!(f, "URGENT"),
            UrgencyTier::Review => write!(f, "REVIEW"),
            UrgencyTier::Sufficient => write!(f, "SUFFICIENT"),
            UrgencyTier::NoData => write!(f, "NO_DATA"),
        }
    }
}

// ==========================================
// 剩余天数 (Days Remaining)
// ==========================================
// 显式带标记的值,取代旧版 999 哨兵:
// 正常大数值与"无法估算"在类型层面不再混淆
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DaysRemaining {
    Days(f64), // 预计还可销售的天数（库存 / 日均销量）
    NoData,    // 销量为零,无法估算耗尽日
}

impl DaysRemaining {
    /// 向零取整后的天数（无实绩返回 None）
    ///
    /// 分级与展示统一使用该值,7.9 天尚未落入 7 天档
    pub fn floor_days(&self) -> Option<i64> {
        match self {
            DaysRemaining::Days(d) => Some(d.floor() as i64),
            DaysRemaining::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, DaysRemaining::NoData)
    }

    /// 从旧版导出值还原（999 哨兵映射为无实绩）
    pub fn from_legacy(value: f64) -> Self {
        if value == LEGACY_NO_DATA_SENTINEL {
            DaysRemaining::NoData
        } else {
            DaysRemaining::Days(value)
        }
    }
}

// ==========================================
// 等级筛选 (Tier Filter)
// ==========================================
// 展示层筛选项: 全部 / 单一等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierFilter {
    All,
    Urgent,
    Review,
    Sufficient,
}

impl TierFilter {
    /// 等级是否通过当前筛选
    pub fn matches(&self, tier: UrgencyTier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Urgent => tier == UrgencyTier::Urgent,
            TierFilter::Review => tier == UrgencyTier::Review,
            TierFilter::Sufficient => tier == UrgencyTier::Sufficient,
        }
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierFilter::All => write!(f, "ALL"),
            TierFilter::Urgent => write!(f, "URGENT"),
            TierFilter::Review => write!(f, "REVIEW"),
            TierFilter::Sufficient => write!(f, "SUFFICIENT"),
        }
    }
}

// ==========================================
// 供应商排序方向 (Supplier Sort)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierSort {
    Asc,
    Desc,
}

impl fmt::Display for SupplierSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierSort::Asc => write!(f, "ASC"),
            SupplierSort::Desc => write!(f, "DESC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_days_truncates_toward_zero() {
        assert_eq!(DaysRemaining::Days(7.9).floor_days(), Some(7));
        assert_eq!(DaysRemaining::Days(7.0).floor_days(), Some(7));
        assert_eq!(DaysRemaining::NoData.floor_days(), None);
    }

    #[test]
    fn test_legacy_sentinel_maps_to_no_data() {
        assert!(DaysRemaining::from_legacy(999.0).is_no_data());
        assert_eq!(
            DaysRemaining::from_legacy(12.5),
            DaysRemaining::Days(12.5)
        );
    }

    #[test]
    fn test_tier_filter_matches() {
        assert!(TierFilter::All.matches(UrgencyTier::NoData));
        assert!(TierFilter::Urgent.matches(UrgencyTier::Urgent));
        assert!(!TierFilter::Urgent.matches(UrgencyTier::Review));
        // 无实绩只在"全部"下可见
        assert!(!TierFilter::Sufficient.matches(UrgencyTier::NoData));
    }
}
