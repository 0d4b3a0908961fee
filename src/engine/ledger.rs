// ==========================================
// 库存补货决策系统 - 台账维护引擎
// ==========================================
// 职责: 将当日库存快照合并进销售履历台账
// 输入: 既有台账 + 当日快照 + 当日日期 + 保留窗口
// 输出: 更新后的台账 + 当前库存索引
// ==========================================
// 销量推定: 昨日库存 − 今日库存,下限 0
// 库存上升(补货)不产生负销量,记 0
// ==========================================

use crate::domain::history::{HistoryEntry, Ledger};
use crate::domain::snapshot::{ProductInfo, SnapshotRow};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// MergeOutcome - 合并结果
// ==========================================
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// 合并后的台账: 窗口内既有记录 + 当日新记录
    pub ledger: Ledger,
    /// 当前库存索引,按商品编码建键（快照真值）
    pub current_stock: BTreeMap<String, ProductInfo>,
}

// ==========================================
// LedgerMaintainer - 台账维护引擎
// ==========================================
pub struct LedgerMaintainer;

impl LedgerMaintainer {
    pub fn new() -> Self {
        Self
    }

    /// 合并当日快照
    ///
    /// 步骤:
    /// 1. 清理既有台账: 丢弃早于保留窗口的记录与"当日"记录（当日重算）,
    ///    同日重复记录只保留一条（后写覆盖先写）
    /// 2. 以每商品保留集中最晚一条的库存数为基准,推定当日销量
    /// 3. 每个快照商品追加一条当日记录
    /// 4. 由快照构建当前库存索引
    ///
    /// 边界:
    /// - 在履历中但不在当日快照中的商品不产出当日记录,
    ///   其历史记录留在台账内直到超出保留窗口
    /// - 新商品无基准,当日销量记 0
    #[instrument(skip(self, existing, snapshot), fields(products = snapshot.len()))]
    pub fn merge(
        &self,
        existing: Ledger,
        snapshot: &[SnapshotRow],
        today: NaiveDate,
        retention_days: u32,
    ) -> MergeOutcome {
        let cutoff = today - Duration::days(retention_days as i64);

        // 1. 清理既有台账（商品内按日期建键,天然有序且去重）
        let mut kept: BTreeMap<String, BTreeMap<NaiveDate, HistoryEntry>> = BTreeMap::new();
        let mut dropped = 0usize;
        for code in existing.product_codes() {
            let entries = existing.entries_for(code).unwrap_or(&[]);
            for entry in entries {
                if entry.date < cutoff || entry.date == today {
                    dropped += 1;
                    continue;
                }
                kept.entry(code.to_string())
                    .or_default()
                    .insert(entry.date, entry.clone());
            }
        }

        // 2. 每商品保留集中最晚一条的库存数
        let last_stock_map: BTreeMap<String, i64> = kept
            .iter()
            .filter_map(|(code, by_date)| {
                by_date
                    .values()
                    .next_back()
                    .map(|e| (code.clone(), e.stock_level))
            })
            .collect();

        // 3. 追加当日记录 + 4. 构建当前库存索引
        let mut current_stock: BTreeMap<String, ProductInfo> = BTreeMap::new();
        for row in snapshot {
            if row.product_code.is_empty() {
                continue;
            }

            let sales_quantity = match last_stock_map.get(&row.product_code) {
                // 基准 − 当前,下限 0: 补货日不产生负销量
                Some(last) => (last - row.stock_level).max(0),
                None => 0,
            };

            let entry = HistoryEntry {
                date: today,
                product_code: row.product_code.clone(),
                stock_level: row.stock_level,
                sales_quantity,
            };
            // 快照内同编码重复行,后行覆盖前行
            kept.entry(row.product_code.clone())
                .or_default()
                .insert(today, entry);

            current_stock.insert(row.product_code.clone(), ProductInfo::from(row));
        }

        let mut ledger = Ledger::new();
        for by_date in kept.into_values() {
            for entry in by_date.into_values() {
                ledger.push(entry);
            }
        }

        tracing::debug!(
            kept = ledger.total_entries(),
            dropped,
            "台账合并完成"
        );

        MergeOutcome {
            ledger,
            current_stock,
        }
    }
}

impl Default for LedgerMaintainer {
    fn default() -> Self {
        Self::new()
    }
}
