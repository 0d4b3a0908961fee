// ==========================================
// 库存补货决策系统 - 台账存储
// ==========================================
// 存储: 带表头的 CSV 文件 date,product_code,stock_level,sales_quantity
// 读取: 容忍乱序与坏单元格（数值降级 0,坏日期/空编码整行跳过）
// 写入: 全量缓冲后一次原子替换,不做增量追加
// ==========================================

use crate::domain::history::{HistoryEntry, Ledger};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::instrument;

const LEDGER_HEADERS: [&str; 4] = ["date", "product_code", "stock_level", "sales_quantity"];

// ==========================================
// LedgerRepository - 台账存储
// ==========================================
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取台账文件
    ///
    /// 文件不存在视为空台账（首次运行）。
    /// 坏行按降级规则处理,单行坏数据不中断读取。
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> RepositoryResult<Ledger> {
        if !self.path.exists() {
            tracing::info!("台账文件不存在,视为空台账");
            return Ok(Ledger::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut ledger = Ledger::new();
        let mut skipped = 0usize;
        for (idx, result) in reader.records().enumerate() {
            // 单行读取失败（如非 UTF-8 字节）不中断整体读取
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(row = idx + 2, error = %e, "台账行读取失败,已跳过");
                    continue;
                }
            };
            match parse_row(&record) {
                Some(entry) => ledger.push(entry),
                None => {
                    skipped += 1;
                    tracing::warn!(row = idx + 2, "台账行无法解析,已跳过");
                }
            }
        }

        tracing::debug!(
            entries = ledger.total_entries(),
            skipped,
            "台账读取完成"
        );
        Ok(ledger)
    }

    /// 原子重写台账
    ///
    /// 先在内存缓冲完整替换内容,再经同目录临时文件 rename 落盘。
    /// 任一步失败时既有文件保持原样。
    #[instrument(skip(self, ledger), fields(entries = ledger.total_entries()))]
    pub fn save(&self, ledger: &Ledger) -> RepositoryResult<()> {
        // 1. 内存内序列化完整内容
        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer.write_record(LEDGER_HEADERS)?;
        for entry in ledger.iter_sorted() {
            writer.write_record([
                entry.date.to_string(),
                entry.product_code.clone(),
                entry.stock_level.to_string(),
                entry.sales_quantity.to_string(),
            ])?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| RepositoryError::InternalError(e.to_string()))?;

        // 2. 同目录临时文件 + rename,保证替换原子性
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| RepositoryError::AtomicReplaceError(e.to_string()))?;
        tmp.write_all(&buffer)
            .map_err(|e| RepositoryError::AtomicReplaceError(e.to_string()))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| RepositoryError::AtomicReplaceError(e.to_string()))?;
        tmp.persist(&self.path)?;

        tracing::debug!("台账原子替换完成");
        Ok(())
    }
}

/// 单行解析: 坏日期或空编码返回 None,数值单元格降级 0
fn parse_row(record: &csv::StringRecord) -> Option<HistoryEntry> {
    let date = NaiveDate::parse_from_str(record.get(0)?.trim(), "%Y-%m-%d").ok()?;
    let product_code = record.get(1)?.trim().to_string();
    if product_code.is_empty() {
        return None;
    }

    Some(HistoryEntry {
        date,
        product_code,
        stock_level: parse_cell(record.get(2)),
        sales_quantity: parse_cell(record.get(3)),
    })
}

fn parse_cell(value: Option<&str>) -> i64 {
    let raw = value.unwrap_or("").trim();
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    raw.parse::<f64>().map(|f| f as i64).unwrap_or(0)
}
