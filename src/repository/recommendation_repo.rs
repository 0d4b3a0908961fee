// ==========================================
// 库存补货决策系统 - 建议表存储
// ==========================================
// 导出: 8 列定序 CSV（供应商在前,与下发分单习惯一致）
// 再读入: 兼容旧版导出（999 哨兵 / 日文无实绩文案）,
//         等级一律由数值剩余天数重判,不信任已渲染标签
// ==========================================

use crate::config::Settings;
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{DaysRemaining, NO_DATA_LABEL};
use crate::engine::classifier::ReorderClassifier;
use crate::repository::error::RepositoryResult;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};
use tracing::instrument;

const RESULT_HEADERS: [&str; 8] = [
    "供应商",
    "商品编码",
    "商品名称",
    "库存数",
    "日均销量",
    "剩余天数",
    "建议订货量",
    "状态",
];

// 旧版导出使用的日文无实绩文案
const LEGACY_NO_DATA_LABEL: &str = "実績なし";

// ==========================================
// RecommendationRepository - 建议表存储
// ==========================================
pub struct RecommendationRepository {
    path: PathBuf,
}

impl RecommendationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 导出建议表
    ///
    /// 列格式: 日均销量 2 位小数;剩余天数取整或无实绩文案;
    /// 状态 = 标记 + 等级文案。哨兵值 999 不再写出。
    #[instrument(skip(self, recommendations), fields(rows = recommendations.len()))]
    pub fn save(&self, recommendations: &[Recommendation]) -> RepositoryResult<()> {
        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(RESULT_HEADERS)?;

        for rec in recommendations {
            let days_cell = match rec.days_remaining.floor_days() {
                Some(d) => d.to_string(),
                None => NO_DATA_LABEL.to_string(),
            };
            let avg_cell = if rec.days_remaining.is_no_data() && rec.avg_daily_sales <= 0.0 {
                NO_DATA_LABEL.to_string()
            } else {
                format!("{:.2}", rec.avg_daily_sales)
            };

            writer.write_record([
                rec.supplier.clone(),
                rec.product_code.clone(),
                rec.product_name.clone(),
                rec.stock_level.to_string(),
                avg_cell,
                days_cell,
                rec.order_quantity.to_string(),
                rec.urgency_tier.display_label(),
            ])?;
        }

        writer.flush()?;
        tracing::info!(path = %self.path.display(), "建议表导出完成");
        Ok(())
    }

    /// 再读入既有导出文件（含旧版格式）
    ///
    /// 等级不取第 8 列的标签,而是按当前阈值由剩余天数重判:
    /// 标签可能是旧阈值下渲染的,也可能混入 999 哨兵的误分级
    #[instrument(skip(self, settings), fields(path = %self.path.display()))]
    pub fn load(&self, settings: &Settings) -> RepositoryResult<Vec<Recommendation>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let classifier = ReorderClassifier::new();
        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for (idx, result) in reader.records().enumerate() {
            // 单行读取失败不中断整体读取
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(row = idx + 2, error = %e, "建议行读取失败,已跳过");
                    continue;
                }
            };

            let product_code = record.get(1).unwrap_or("").trim().to_string();
            if product_code.is_empty() {
                skipped += 1;
                tracing::warn!(row = idx + 2, "建议行缺商品编码,已跳过");
                continue;
            }

            let days_remaining = parse_days_cell(record.get(5));
            let avg_daily_sales = parse_numeric_cell(record.get(4));
            // 等级重判: 唯一事实来源是数值剩余天数
            let urgency_tier = classifier.tier_for(days_remaining, settings);

            rows.push(Recommendation {
                supplier: record.get(0).unwrap_or("").trim().to_string(),
                product_code,
                product_name: record.get(2).unwrap_or("").trim().to_string(),
                stock_level: parse_numeric_cell(record.get(3)) as i64,
                avg_daily_sales,
                days_remaining,
                order_quantity: parse_numeric_cell(record.get(6)) as i64,
                urgency_tier,
            });
        }

        tracing::debug!(rows = rows.len(), skipped, "建议表读取完成");
        Ok(rows)
    }
}

/// 剩余天数单元格解析: 无实绩文案与 999 哨兵均映射为 NoData
fn parse_days_cell(value: Option<&str>) -> DaysRemaining {
    let raw = value.unwrap_or("").trim();
    if raw.is_empty() || raw == NO_DATA_LABEL || raw == LEGACY_NO_DATA_LABEL {
        return DaysRemaining::NoData;
    }
    match raw.parse::<f64>() {
        Ok(v) => DaysRemaining::from_legacy(v),
        Err(_) => DaysRemaining::NoData,
    }
}

/// 数值单元格解析,无实绩文案与坏数据降级 0
fn parse_numeric_cell(value: Option<&str>) -> f64 {
    let raw = value.unwrap_or("").trim();
    if raw.is_empty() || raw == NO_DATA_LABEL || raw == LEGACY_NO_DATA_LABEL {
        return 0.0;
    }
    raw.parse::<f64>().unwrap_or(0.0)
}
