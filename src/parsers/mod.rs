//! # 解析器模块
//!
//! 读取三类输入：县坐标 CSV、县级选举结果 CSV、州边界 GeoJSON。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: counties, election, boundaries

pub mod boundaries;
pub mod counties;
pub mod election;

pub use boundaries::{parse_boundaries_file, StateBoundary};
pub use counties::parse_counties_file;
pub use election::parse_election_file;

use crate::error::{ShiftMapError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 读取整个输入文件，区分 "不存在" 与其他 I/O 错误
fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ShiftMapError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ShiftMapError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })
}
