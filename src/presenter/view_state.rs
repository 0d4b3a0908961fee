// ==========================================
// 库存补货决策系统 - 展示视图状态
// ==========================================
// 原则: 筛选/检索/排序状态显式成结构体,
// 渲染是 (建议列表, 视图状态) 的纯函数,无隐藏状态
// ==========================================

use crate::domain::types::{SupplierSort, TierFilter};
use serde::{Deserialize, Serialize};

// ==========================================
// ViewState - 视图状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: TierFilter,         // 等级筛选
    pub search: String,             // 检索文本（商品名/编码/供应商,不区分大小写）
    pub supplier_sort: SupplierSort, // 供应商排序方向
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: TierFilter::All,
            search: String::new(),
            supplier_sort: SupplierSort::Asc,
        }
    }
}

impl ViewState {
    pub fn with_filter(mut self, filter: TierFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SupplierSort) -> Self {
        self.supplier_sort = sort;
        self
    }
}
