// ==========================================
// 库存补货决策系统 - 库存快照领域模型
// ==========================================
// 快照 = 导入时刻的"今日真值",每商品一行
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SnapshotRow - 每日库存快照行
// ==========================================
// 用途: 导入层产出,台账维护引擎消费
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub product_code: String, // 商品编码（主键,缺失的行在导入层被跳过）
    pub product_name: String, // 商品名称
    pub stock_level: i64,     // 当前库存数
    pub supplier: String,     // 供应商名称
}

// ==========================================
// ProductInfo - 当前库存查询值
// ==========================================
// 台账合并后按商品编码建键,供分级引擎与展示层读取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_name: String,
    pub stock_level: i64,
    pub supplier: String,
}

impl From<&SnapshotRow> for ProductInfo {
    fn from(row: &SnapshotRow) -> Self {
        Self {
            product_name: row.product_name.clone(),
            stock_level: row.stock_level,
            supplier: row.supplier.clone(),
        }
    }
}
