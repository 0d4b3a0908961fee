// ==========================================
// 建议表存储集成测试
// ==========================================
// 测试目标: 导出格式 / 再读入重判 / 旧版哨兵兼容
// ==========================================

use inventory_dss::domain::types::{DaysRemaining, UrgencyTier};
use inventory_dss::repository::RecommendationRepository;
use inventory_dss::{Recommendation, Settings};
use tempfile::TempDir;

// ==========================================
// 测试辅助函数
// ==========================================

fn settings() -> Settings {
    Settings {
        target_coverage_days: 30,
        lead_time_days: 3,
        review_threshold_days: 7,
        retention_days: 90,
    }
}

fn rec(code: &str, avg: f64, days: DaysRemaining, tier: UrgencyTier, qty: i64) -> Recommendation {
    Recommendation {
        supplier: "YCC".to_string(),
        product_code: code.to_string(),
        product_name: format!("商品{}", code),
        stock_level: 5,
        avg_daily_sales: avg,
        days_remaining: days,
        order_quantity: qty,
        urgency_tier: tier,
    }
}

// ==========================================
// 导出
// ==========================================

#[test]
fn test_export_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    let repo = RecommendationRepository::new(&path);

    repo.save(&[
        rec("123-456", 2.5, DaysRemaining::Days(2.0), UrgencyTier::Urgent, 70),
        rec("123-459", 0.0, DaysRemaining::NoData, UrgencyTier::NoData, 0),
    ])
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "供应商,商品编码,商品名称,库存数,日均销量,剩余天数,建议订货量,状态"
    );
    // 日均 2 位小数,剩余天数取整,状态带标记
    assert!(lines[1].contains("2.50"));
    assert!(lines[1].contains(",2,"));
    assert!(lines[1].contains("🔴 紧急订货"));
    // 无实绩行: 文案而非 999
    assert!(lines[2].contains("无实绩"));
    assert!(!lines[2].contains("999"));
}

#[test]
fn test_export_then_load_round_trip_rederives_tier() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    let repo = RecommendationRepository::new(&path);

    repo.save(&[
        rec("123-456", 2.5, DaysRemaining::Days(2.4), UrgencyTier::Urgent, 70),
        rec("123-458", 2.0, DaysRemaining::Days(25.0), UrgencyTier::Sufficient, 10),
    ])
    .unwrap();

    let loaded = repo.load(&settings()).unwrap();
    assert_eq!(loaded.len(), 2);
    // 导出时剩余天数已取整,读回后等级按当前阈值重判
    assert_eq!(loaded[0].days_remaining, DaysRemaining::Days(2.0));
    assert_eq!(loaded[0].urgency_tier, UrgencyTier::Urgent);
    assert_eq!(loaded[1].urgency_tier, UrgencyTier::Sufficient);
}

// ==========================================
// 旧版兼容
// ==========================================

#[test]
fn test_legacy_999_sentinel_maps_to_no_data_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.csv");
    // 旧版导出: 999 哨兵 + 日文无实绩文案 + 带绘文字的旧标签
    std::fs::write(
        &path,
        "仕入先,商品コード,商品名,在庫数,1日平均販売数,在庫期限(日),発注目安(数),ステータス\n\
         YCC,123-459,【単品】商品D,0,実績なし,999,0,実績なし\n\
         YCC,123-456,【単品】商品A,5,2.50,2,70,🔴 急ぎ発注\n",
    )
    .unwrap();

    let loaded = RecommendationRepository::new(&path).load(&settings()).unwrap();
    assert_eq!(loaded.len(), 2);

    // 999 是哨兵,不是真实的 999 天
    assert!(loaded[0].days_remaining.is_no_data());
    assert_eq!(loaded[0].urgency_tier, UrgencyTier::NoData);
    assert_eq!(loaded[0].avg_daily_sales, 0.0);

    assert_eq!(loaded[1].days_remaining, DaysRemaining::Days(2.0));
    assert_eq!(loaded[1].urgency_tier, UrgencyTier::Urgent);
}

#[test]
fn test_load_rederives_tier_under_changed_thresholds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    let repo = RecommendationRepository::new(&path);

    // 导出时 5 天在旧阈值下是"待复核"
    repo.save(&[rec("123-457", 1.8, DaysRemaining::Days(5.0), UrgencyTier::Review, 39)])
        .unwrap();

    // 阈值收紧后重新读入: 5 天落入紧急档
    let tightened = Settings {
        lead_time_days: 5,
        review_threshold_days: 10,
        ..settings()
    };
    let loaded = repo.load(&tightened).unwrap();
    assert_eq!(loaded[0].urgency_tier, UrgencyTier::Urgent);
}

#[test]
fn test_non_utf8_row_does_not_abort_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    let mut content: Vec<u8> = Vec::new();
    content
        .extend_from_slice("供应商,商品编码,商品名称,库存数,日均销量,剩余天数,建议订货量,状态\n".as_bytes());
    content.extend_from_slice("YCC,123-456,商品A,5,2.50,2,70,🔴 紧急订货\n".as_bytes());
    content.extend_from_slice(b"YCC,123-4\xff57,bad,5,2.50,2,70,x\n");
    content.extend_from_slice("YCC,123-458,商品C,50,2.00,25,10,🟢 库存充足\n".as_bytes());
    std::fs::write(&path, content).unwrap();

    let loaded = RecommendationRepository::new(&path).load(&settings()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].product_code, "123-456");
    assert_eq!(loaded[1].product_code, "123-458");
}

#[test]
fn test_rows_without_code_are_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    std::fs::write(
        &path,
        "供应商,商品编码,商品名称,库存数,日均销量,剩余天数,建议订货量,状态\n\
         YCC,,无编码,5,2.50,2,70,🔴 紧急订货\n\
         YCC,123-456,商品A,5,2.50,2,70,🔴 紧急订货\n",
    )
    .unwrap();

    let loaded = RecommendationRepository::new(&path).load(&settings()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].product_code, "123-456");
}
