// ==========================================
// 库存补货决策系统 - 建议表渲染
// ==========================================
// 职责: 检索 / 等级筛选 / 供应商排序 / 汇总计数 / 单元格格式化
// 红线: 行等级与图标由数值剩余天数按当前阈值重判,
//       即使输入行带有历史标签也不采用
// ==========================================

use crate::config::Settings;
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{SupplierSort, UrgencyTier, NO_DATA_LABEL};
use crate::engine::classifier::ReorderClassifier;
use crate::presenter::view_state::ViewState;

// ==========================================
// TierSummary - 等级汇总计数
// ==========================================
// 汇总统计覆盖全量建议,不随筛选/检索变化
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierSummary {
    pub urgent: usize,
    pub review: usize,
    pub sufficient: usize,
    pub no_data: usize,
    pub total: usize,
}

// ==========================================
// RenderedRow - 格式化后的表格行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub supplier: String,
    pub product_code: String,
    pub product_name: String,
    pub stock_level: String,
    pub avg_daily_sales: String, // 2 位小数,无实绩时为文案
    pub days_remaining: String,  // 取整天数,无实绩时为文案（绝不显示哨兵数值）
    pub order_quantity: String,
    pub status: String,          // 标记 + 等级文案
    pub tier: UrgencyTier,       // 重判后的等级（供上层着色等使用）
}

// ==========================================
// TableView - 渲染结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RenderedRow>,
    pub summary: TierSummary,
}

/// 渲染建议表
///
/// (建议列表, 视图状态, 配置) 的纯函数:
/// 1. 全量重判等级并汇总计数
/// 2. 按检索文本与等级筛选过滤
/// 3. 按供应商稳定排序（同名保持输入顺序）
/// 4. 格式化单元格
pub fn render(
    recommendations: &[Recommendation],
    view: &ViewState,
    settings: &Settings,
) -> TableView {
    let classifier = ReorderClassifier::new();

    // 1. 重判 + 汇总（筛选前的全量计数）
    let mut summary = TierSummary::default();
    let tiers: Vec<UrgencyTier> = recommendations
        .iter()
        .map(|rec| {
            let tier = classifier.tier_for(rec.days_remaining, settings);
            match tier {
                UrgencyTier::Urgent => summary.urgent += 1,
                UrgencyTier::Review => summary.review += 1,
                UrgencyTier::Sufficient => summary.sufficient += 1,
                UrgencyTier::NoData => summary.no_data += 1,
            }
            tier
        })
        .collect();
    summary.total = recommendations.len();

    // 2. 过滤
    let query = view.search.trim().to_lowercase();
    let mut filtered: Vec<(&Recommendation, UrgencyTier)> = recommendations
        .iter()
        .zip(tiers)
        .filter(|(rec, tier)| view.filter.matches(*tier) && matches_search(rec, &query))
        .collect();

    // 3. 稳定排序
    match view.supplier_sort {
        SupplierSort::Asc => filtered.sort_by(|a, b| a.0.supplier.cmp(&b.0.supplier)),
        SupplierSort::Desc => filtered.sort_by(|a, b| b.0.supplier.cmp(&a.0.supplier)),
    }

    // 4. 格式化
    let rows = filtered
        .into_iter()
        .map(|(rec, tier)| render_row(rec, tier))
        .collect();

    TableView { rows, summary }
}

/// 检索匹配: 商品名 / 编码 / 供应商的子串,不区分大小写
fn matches_search(rec: &Recommendation, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    rec.product_name.to_lowercase().contains(query)
        || rec.product_code.to_lowercase().contains(query)
        || rec.supplier.to_lowercase().contains(query)
}

fn render_row(rec: &Recommendation, tier: UrgencyTier) -> RenderedRow {
    let days_remaining = match rec.days_remaining.floor_days() {
        Some(d) => d.to_string(),
        None => NO_DATA_LABEL.to_string(),
    };
    let avg_daily_sales = if rec.days_remaining.is_no_data() && rec.avg_daily_sales <= 0.0 {
        NO_DATA_LABEL.to_string()
    } else {
        format!("{:.2}", rec.avg_daily_sales)
    };

    RenderedRow {
        supplier: rec.supplier.clone(),
        product_code: rec.product_code.clone(),
        product_name: rec.product_name.clone(),
        stock_level: rec.stock_level.to_string(),
        avg_daily_sales,
        days_remaining,
        order_quantity: rec.order_quantity.to_string(),
        status: tier.display_label(),
        tier,
    }
}

/// 渲染为制表符分隔的文本表,供 CLI 输出
pub fn render_text(view: &TableView) -> String {
    let mut out = String::new();
    out.push_str("供应商\t商品编码\t商品名称\t库存数\t日均销量\t剩余天数\t建议订货量\t状态\n");
    for row in &view.rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            row.supplier,
            row.product_code,
            row.product_name,
            row.stock_level,
            row.avg_daily_sales,
            row.days_remaining,
            row.order_quantity,
            row.status,
        ));
    }
    out.push_str(&format!(
        "合计 {} | 🔴 紧急 {} | 🟡 待复核 {} | 🟢 充足 {} | ⚪ 无实绩 {}\n",
        view.summary.total,
        view.summary.urgent,
        view.summary.review,
        view.summary.sufficient,
        view.summary.no_data,
    ));
    out
}
