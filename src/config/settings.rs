// ==========================================
// 库存补货决策系统 - 运行配置
// ==========================================
// 职责: 三个决策阈值 + 履历保留窗口,每次运行加载一次
// 存储: JSON 配置文件;文件缺失时使用默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

// ==========================================
// Settings - 运行配置
// ==========================================
// 约定 lead_time_days < review_threshold_days,但不强制校验:
// 分级判定按固定顺序先比供货周期再比复核阈值,结果仍然确定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub target_coverage_days: u32,   // 目标覆盖天数（订货量补足到该天数）
    pub lead_time_days: u32,         // 供货周期（剩余天数 ≤ 该值 → 紧急）
    pub review_threshold_days: u32,  // 复核阈值（剩余天数 ≤ 该值 → 待复核）
    pub retention_days: u32,         // 履历保留窗口（早于该窗口的记录被清除）
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_coverage_days: 30,
            lead_time_days: 3,
            review_threshold_days: 7,
            retention_days: 90,
        }
    }
}

impl Settings {
    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(Settings): 加载成功（文件内未出现的键取默认值）
    /// - Err: 文件读取或 JSON 解析失败
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// 加载配置,未指定路径或文件不存在时回落默认值
    ///
    /// 指定了路径但解析失败属于配置错误,照常上报
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                tracing::warn!("配置文件不存在,使用默认配置: {}", p.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}
