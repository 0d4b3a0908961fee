// ==========================================
// 库存补货决策系统 - 批运行入口
// ==========================================
// 用法:
//   inventory-dss <快照文件.csv|.xlsx> <台账文件.csv> <建议输出.csv> [配置文件.json]
//
// 一次运行 = 一份快照对一份台账;并发运行由调用方串行化
// ==========================================

use inventory_dss::domain::types::SupplierSort;
use inventory_dss::presenter::{self, ViewState};
use inventory_dss::repository::{LedgerRepository, RecommendationRepository};
use inventory_dss::{ReorderOrchestrator, Settings, SnapshotImporter};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    inventory_dss::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 发注点决策支持", inventory_dss::APP_NAME);
    tracing::info!("系统版本: {}", inventory_dss::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let (snapshot_path, ledger_path, output_path) = match (args.next(), args.next(), args.next()) {
        (Some(s), Some(l), Some(o)) => (PathBuf::from(s), PathBuf::from(l), PathBuf::from(o)),
        _ => {
            eprintln!(
                "用法: inventory-dss <快照文件.csv|.xlsx> <台账文件.csv> <建议输出.csv> [配置文件.json]"
            );
            std::process::exit(2);
        }
    };
    let settings_path = args.next().map(PathBuf::from);

    // 配置每次运行加载一次
    let settings = Settings::load_or_default(settings_path.as_deref())?;
    tracing::info!(
        target_coverage_days = settings.target_coverage_days,
        lead_time_days = settings.lead_time_days,
        review_threshold_days = settings.review_threshold_days,
        retention_days = settings.retention_days,
        "运行配置"
    );

    let today = chrono::Local::now().date_naive();

    // 导入当日快照
    let snapshot = SnapshotImporter::new().import(&snapshot_path)?;

    // 执行批运行（台账合并 + 原子重写 + 估算分级）
    let orchestrator = ReorderOrchestrator::new(LedgerRepository::new(&ledger_path));
    let result = orchestrator.run(&snapshot, today, &settings, SupplierSort::Asc)?;

    // 导出建议表
    RecommendationRepository::new(&output_path).save(&result.recommendations)?;

    // 终端输出完整表格与汇总
    let table = presenter::render(&result.recommendations, &ViewState::default(), &settings);
    print!("{}", presenter::render_text(&table));

    tracing::info!(
        snapshot_products = result.summary.products_in_snapshot,
        recommendations = result.summary.recommendations,
        skipped_no_history = result.summary.skipped_no_history,
        "运行结束"
    );

    Ok(())
}
