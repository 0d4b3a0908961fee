// ==========================================
// 库存补货决策系统 - 导入层
// ==========================================
// 职责: 外部文件 → 领域快照行,围绕引擎的格式适配器
// ==========================================

pub mod error;
pub mod file_parser;
pub mod snapshot_importer;

pub use error::{ImportError, ImportResult};
pub use file_parser::{parser_for, CsvParser, ExcelParser, FileParser};
pub use snapshot_importer::SnapshotImporter;
