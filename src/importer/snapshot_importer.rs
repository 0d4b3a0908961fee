// ==========================================
// 库存补货决策系统 - 快照导入器
// ==========================================
// 职责: 原始记录 → SnapshotRow,字段降级规则在此集中
// 表头契约: 上游为日文导出（助ネコ）,同时接受 ASCII 别名
// ==========================================
// 降级规则: 缺商品编码的行跳过;数值解析失败记 0;
// 单行坏数据不中断整个导入
// ==========================================

use crate::domain::snapshot::SnapshotRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::parser_for;
use std::collections::HashMap;
use std::path::Path;
use tracing::instrument;

// 表头别名,按顺序查找（上游日文导出在前）
const CODE_HEADERS: &[&str] = &["助ネコ商品コード", "商品コード", "product_code"];
const NAME_HEADERS: &[&str] = &["商品名", "product_name"];
const STOCK_HEADERS: &[&str] = &["在庫数", "stock_level"];
const SUPPLIER_HEADERS: &[&str] = &["仕入先", "supplier"];

// ==========================================
// SnapshotImporter - 快照导入器
// ==========================================
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn new() -> Self {
        Self
    }

    /// 导入当日库存快照文件（CSV 或 Excel）
    ///
    /// # 返回
    /// - Ok(Vec<SnapshotRow>): 有效快照行（坏行已按降级规则处理）
    /// - Err(ImportError): 文件级失败（不存在/格式不支持/解析失败/编码列整列缺失）
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn import(&self, path: &Path) -> ImportResult<Vec<SnapshotRow>> {
        let parser = parser_for(path)?;
        let records = parser.parse_to_raw_records(path)?;

        // 表头整列缺编码列属于结构性坏文件,快速失败而非整表静默跳行
        if let Some(first) = records.first() {
            if !CODE_HEADERS.iter().any(|h| first.contains_key(*h)) {
                return Err(ImportError::HeaderMissing {
                    column: "商品编码".to_string(),
                    aliases: CODE_HEADERS.join(" / "),
                });
            }
        }

        let mut rows = Vec::with_capacity(records.len());
        let mut skipped = 0usize;
        for (idx, record) in records.iter().enumerate() {
            match Self::map_record(record) {
                Some(row) => rows.push(row),
                None => {
                    skipped += 1;
                    // 行号从 2 起算（1 为表头行）
                    tracing::warn!(row = idx + 2, "快照行缺商品编码,已跳过");
                }
            }
        }

        tracing::info!(imported = rows.len(), skipped, "快照导入完成");
        Ok(rows)
    }

    /// 单行映射: 缺商品编码返回 None,其余字段按降级规则取值
    fn map_record(record: &HashMap<String, String>) -> Option<SnapshotRow> {
        let product_code = lookup(record, CODE_HEADERS)?;
        if product_code.is_empty() {
            return None;
        }

        let product_name = lookup(record, NAME_HEADERS).unwrap_or_default();
        let supplier = lookup(record, SUPPLIER_HEADERS).unwrap_or_default();
        let stock_level = lookup(record, STOCK_HEADERS)
            .map(|v| parse_quantity(&v))
            .unwrap_or(0);

        Some(SnapshotRow {
            product_code,
            product_name,
            stock_level,
            supplier,
        })
    }
}

impl Default for SnapshotImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 按别名顺序查找表头对应的单元格
fn lookup(record: &HashMap<String, String>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|key| record.get(*key))
        .map(|v| v.trim().to_string())
}

/// 数量解析,失败降级为 0（上游导出偶见小数形式的整数）
fn parse_quantity(value: &str) -> i64 {
    if let Ok(n) = value.parse::<i64>() {
        return n;
    }
    value.parse::<f64>().map(|f| f as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_record_with_japanese_headers() {
        let rec = record(&[
            ("助ネコ商品コード", "123-456"),
            ("商品名", "【単品】商品A"),
            ("在庫数", "5"),
            ("仕入先", "YCC"),
        ]);

        let row = SnapshotImporter::map_record(&rec).unwrap();
        assert_eq!(row.product_code, "123-456");
        assert_eq!(row.product_name, "【単品】商品A");
        assert_eq!(row.stock_level, 5);
        assert_eq!(row.supplier, "YCC");
    }

    #[test]
    fn test_map_record_with_ascii_aliases() {
        let rec = record(&[
            ("product_code", "A-001"),
            ("product_name", "商品A"),
            ("stock_level", "12"),
            ("supplier", "供应商X"),
        ]);

        let row = SnapshotImporter::map_record(&rec).unwrap();
        assert_eq!(row.product_code, "A-001");
        assert_eq!(row.stock_level, 12);
    }

    #[test]
    fn test_missing_code_row_is_skipped() {
        let rec = record(&[("商品名", "无编码商品"), ("在庫数", "3")]);
        assert!(SnapshotImporter::map_record(&rec).is_none());

        let rec = record(&[("助ネコ商品コード", ""), ("在庫数", "3")]);
        assert!(SnapshotImporter::map_record(&rec).is_none());
    }

    #[test]
    fn test_bad_numeric_degrades_to_zero() {
        let rec = record(&[("助ネコ商品コード", "A-001"), ("在庫数", "abc")]);
        let row = SnapshotImporter::map_record(&rec).unwrap();
        assert_eq!(row.stock_level, 0);
    }

    #[test]
    fn test_decimal_stock_truncates() {
        let rec = record(&[("助ネコ商品コード", "A-001"), ("在庫数", "7.0")]);
        let row = SnapshotImporter::map_record(&rec).unwrap();
        assert_eq!(row.stock_level, 7);
    }
}
