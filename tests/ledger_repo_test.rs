// ==========================================
// 台账存储集成测试
// ==========================================
// 测试目标: CSV 台账的读取降级规则与原子重写
// ==========================================

use chrono::NaiveDate;
use inventory_dss::repository::LedgerRepository;
use inventory_dss::{HistoryEntry, Ledger};
use tempfile::TempDir;

// ==========================================
// 测试辅助函数
// ==========================================

fn entry(day: u32, code: &str, stock: i64, sales: i64) -> HistoryEntry {
    HistoryEntry {
        date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
        product_code: code.to_string(),
        stock_level: stock,
        sales_quantity: sales,
    }
}

// ==========================================
// 读取测试
// ==========================================

#[test]
fn test_missing_file_loads_as_empty_ledger() {
    let dir = TempDir::new().unwrap();
    let repo = LedgerRepository::new(dir.path().join("no_such_ledger.csv"));

    let ledger = repo.load().unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let repo = LedgerRepository::new(dir.path().join("ledger.csv"));

    let mut ledger = Ledger::new();
    ledger.push(entry(1, "A-001", 20, 0));
    ledger.push(entry(2, "A-001", 15, 5));
    ledger.push(entry(1, "B-002", 9, 0));
    repo.save(&ledger).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.total_entries(), 3);
    assert_eq!(loaded.entries_for("A-001").unwrap().len(), 2);
    assert_eq!(
        loaded.entries_for("B-002").unwrap()[0],
        entry(1, "B-002", 9, 0)
    );
}

#[test]
fn test_bad_rows_degrade_without_aborting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.csv");
    // 手工构造带坏数据的台账: 坏日期行、空编码行整行跳过;坏数值降级 0
    std::fs::write(
        &path,
        "date,product_code,stock_level,sales_quantity\n\
         2026-08-01,A-001,20,0\n\
         not-a-date,A-001,15,5\n\
         2026-08-02,,15,5\n\
         2026-08-02,A-001,abc,xyz\n\
         2026-08-03,A-001,10,5\n",
    )
    .unwrap();

    let repo = LedgerRepository::new(&path);
    let ledger = repo.load().unwrap();

    let entries = ledger.entries_for("A-001").unwrap();
    assert_eq!(entries.len(), 3);
    let degraded = entries
        .iter()
        .find(|e| e.date == NaiveDate::from_ymd_opt(2026, 8, 2).unwrap())
        .unwrap();
    assert_eq!(degraded.stock_level, 0);
    assert_eq!(degraded.sales_quantity, 0);
}

#[test]
fn test_non_utf8_row_does_not_abort_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.csv");
    // 中间一行混入非 UTF-8 字节,其余行必须照常读入
    let mut content: Vec<u8> = Vec::new();
    content.extend_from_slice(b"date,product_code,stock_level,sales_quantity\n");
    content.extend_from_slice(b"2026-08-01,A-001,20,0\n");
    content.extend_from_slice(b"2026-08-02,A-0\xff01,15,5\n");
    content.extend_from_slice(b"2026-08-02,A-001,15,5\n");
    content.extend_from_slice(b"2026-08-03,A-001,10,5\n");
    std::fs::write(&path, content).unwrap();

    let ledger = LedgerRepository::new(&path).load().unwrap();
    assert_eq!(ledger.entries_for("A-001").unwrap().len(), 3);
}

#[test]
fn test_unordered_rows_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.csv");
    std::fs::write(
        &path,
        "date,product_code,stock_level,sales_quantity\n\
         2026-08-03,A-001,10,5\n\
         2026-08-01,A-001,20,0\n\
         2026-08-02,A-001,15,5\n",
    )
    .unwrap();

    let ledger = LedgerRepository::new(&path).load().unwrap();
    assert_eq!(ledger.entries_for("A-001").unwrap().len(), 3);
}

// ==========================================
// 原子重写测试
// ==========================================

#[test]
fn test_save_replaces_existing_content_entirely() {
    let dir = TempDir::new().unwrap();
    let repo = LedgerRepository::new(dir.path().join("ledger.csv"));

    let mut first = Ledger::new();
    first.push(entry(1, "A-001", 20, 0));
    first.push(entry(1, "B-002", 9, 0));
    repo.save(&first).unwrap();

    // 整体替换: 旧内容不残留
    let mut second = Ledger::new();
    second.push(entry(2, "A-001", 15, 5));
    repo.save(&second).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.total_entries(), 1);
    assert!(loaded.entries_for("B-002").is_none());
}

#[test]
fn test_save_leaves_no_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let repo = LedgerRepository::new(dir.path().join("ledger.csv"));

    let mut ledger = Ledger::new();
    ledger.push(entry(1, "A-001", 20, 0));
    repo.save(&ledger).unwrap();
    repo.save(&ledger).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["ledger.csv".to_string()]);
}

#[test]
fn test_save_failure_keeps_prior_file_intact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.csv");
    let repo = LedgerRepository::new(&path);

    let mut ledger = Ledger::new();
    ledger.push(entry(1, "A-001", 20, 0));
    repo.save(&ledger).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    // 目标路径被目录占据时 rename 失败,旧文件必须原样保留
    let blocked = LedgerRepository::new(dir.path().join("ledger.csv").join("sub"));
    assert!(blocked.save(&ledger).is_err());

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}
