// ==========================================
// 库存补货决策系统 - 运行编排器
// ==========================================
// 职责: 串联一次完整批运行
// 流程: 读台账 → 合并快照 → 原子重写台账 → 逐商品估算+分级 → 按供应商排序
// ==========================================
// 红线: 台账重写失败即中止,不得在旧台账上继续算建议
// ==========================================

use crate::config::Settings;
use crate::domain::recommendation::Recommendation;
use crate::domain::snapshot::SnapshotRow;
use crate::domain::types::SupplierSort;
use crate::engine::classifier::ReorderClassifier;
use crate::engine::ledger::LedgerMaintainer;
use crate::engine::velocity::VelocityEstimator;
use crate::repository::error::RepositoryResult;
use crate::repository::ledger_repo::LedgerRepository;
use chrono::NaiveDate;
use tracing::instrument;

// ==========================================
// RunSummary - 运行摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub products_in_snapshot: usize, // 快照内商品数
    pub recommendations: usize,      // 产出建议行数
    pub skipped_no_history: usize,   // 履历不足 2 条被跳过的商品数
}

// ==========================================
// RunResult - 运行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct RunResult {
    pub recommendations: Vec<Recommendation>,
    pub summary: RunSummary,
}

// ==========================================
// ReorderOrchestrator - 运行编排器
// ==========================================
pub struct ReorderOrchestrator {
    ledger_repo: LedgerRepository,
    maintainer: LedgerMaintainer,
    estimator: VelocityEstimator,
    classifier: ReorderClassifier,
}

impl ReorderOrchestrator {
    /// 创建编排器
    ///
    /// # 参数
    /// - ledger_repo: 台账存储（负责读取与原子重写）
    pub fn new(ledger_repo: LedgerRepository) -> Self {
        Self {
            ledger_repo,
            maintainer: LedgerMaintainer::new(),
            estimator: VelocityEstimator::new(),
            classifier: ReorderClassifier::new(),
        }
    }

    /// 执行一次批运行
    ///
    /// 单线程同步执行;并发运行由调用方串行化。
    /// 台账重写原子完成: 写入失败时旧台账保持原样,本次运行整体失败。
    #[instrument(skip(self, snapshot, settings), fields(products = snapshot.len(), today = %today))]
    pub fn run(
        &self,
        snapshot: &[SnapshotRow],
        today: NaiveDate,
        settings: &Settings,
        sort: SupplierSort,
    ) -> RepositoryResult<RunResult> {
        // 1. 读取既有台账
        let existing = self.ledger_repo.load()?;
        tracing::debug!(
            products = existing.product_count(),
            entries = existing.total_entries(),
            "台账读取完成"
        );

        // 2. 合并快照（内存内完成）
        let outcome =
            self.maintainer
                .merge(existing, snapshot, today, settings.retention_days);

        // 3. 原子重写台账,失败即中止
        self.ledger_repo.save(&outcome.ledger)?;

        // 4. 逐商品估算 + 分级
        let mut recommendations = Vec::with_capacity(outcome.current_stock.len());
        let mut skipped_no_history = 0usize;
        for (code, info) in &outcome.current_stock {
            let entries = outcome.ledger.entries_for(code).unwrap_or(&[]);
            let avg_daily_sales = match self.estimator.estimate(entries) {
                Some(avg) => avg,
                None => {
                    // 数据不足不是错误,只是覆盖缺口
                    skipped_no_history += 1;
                    continue;
                }
            };

            let assessment =
                self.classifier
                    .classify(avg_daily_sales, info.stock_level, settings);

            recommendations.push(Recommendation {
                supplier: info.supplier.clone(),
                product_code: code.clone(),
                product_name: info.product_name.clone(),
                stock_level: info.stock_level,
                avg_daily_sales,
                days_remaining: assessment.days_remaining,
                order_quantity: assessment.order_quantity,
                urgency_tier: assessment.urgency_tier,
            });
        }

        // 5. 按供应商排序（稳定排序,同名供应商保持插入顺序）
        match sort {
            SupplierSort::Asc => {
                recommendations.sort_by(|a, b| a.supplier.cmp(&b.supplier));
            }
            SupplierSort::Desc => {
                recommendations.sort_by(|a, b| b.supplier.cmp(&a.supplier));
            }
        }

        let summary = RunSummary {
            products_in_snapshot: snapshot.len(),
            recommendations: recommendations.len(),
            skipped_no_history,
        };
        tracing::info!(
            recommendations = summary.recommendations,
            skipped = summary.skipped_no_history,
            "批运行完成"
        );

        Ok(RunResult {
            recommendations,
            summary,
        })
    }
}
