// ==========================================
// 库存补货决策系统 - 销售履历领域模型
// ==========================================
// 台账按商品编码分组存放,每个商品一条按日期排列的序列
// 红线: 同一 (商品, 日期) 至多一条记录
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// HistoryEntry - 单日履历记录
// ==========================================
// 用途: 台账维护引擎写入,流速估算引擎只读
// 过去日期的记录一经写入不再变更;当日记录在本次运行内可重算覆盖
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,       // 记录日期（ISO DATE）
    pub product_code: String,  // 商品编码
    pub stock_level: i64,      // 当日记录的库存数
    pub sales_quantity: i64,   // 由库存差推定的当日销量（恒 ≥ 0）
}

// ==========================================
// Ledger - 销售履历台账
// ==========================================
// 按商品编码建键,避免逐商品全表扫描
// 存储层不保证日期有序,消费方使用前须自行排序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    entries: BTreeMap<String, Vec<HistoryEntry>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条履历记录（不去重,去重由台账维护引擎完成）
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries
            .entry(entry.product_code.clone())
            .or_default()
            .push(entry);
    }

    /// 某商品的履历序列（可能无序）
    pub fn entries_for(&self, product_code: &str) -> Option<&[HistoryEntry]> {
        self.entries.get(product_code).map(|v| v.as_slice())
    }

    /// 台账覆盖的商品编码（按编码升序）
    pub fn product_codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// 按 (商品编码, 日期) 顺序遍历全部记录,用于存储层整体重写
    pub fn iter_sorted(&self) -> Vec<&HistoryEntry> {
        let mut rows: Vec<&HistoryEntry> = Vec::with_capacity(self.total_entries());
        for entries in self.entries.values() {
            let mut per_product: Vec<&HistoryEntry> = entries.iter().collect();
            per_product.sort_by_key(|e| e.date);
            rows.extend(per_product);
        }
        rows
    }

    pub fn total_entries(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }

    pub fn product_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
