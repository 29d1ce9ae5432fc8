//! # 选票变化计算模块
//!
//! 过滤选举记录、建立 (县, 年份, 政党) → 得票率 索引，
//! 并计算两届选举之间每个县两个政党的得票率变化。
//!
//! ## 子模块
//! - `filter`: 年份 / 排除地区 / 编码格式过滤
//! - `index`: 得票率索引与重复行策略
//! - `compute`: 变化量计算与坐标连接
//! - `export`: 结果表导出 CSV
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/` 数据模型

pub mod compute;
pub mod export;
pub mod filter;
pub mod index;

pub use compute::compute_shifts;
pub use filter::retain;
pub use index::VoteShareIndex;

use clap::ValueEnum;
use std::collections::BTreeSet;

/// 同一 (县, 年份, 政党) 出现多行时的处理策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the first row in file order
    #[default]
    First,
    /// Keep the last row in file order
    Last,
    /// Abort on any duplicate
    Reject,
}

/// 过滤与变化计算参数
#[derive(Debug, Clone)]
pub struct ShiftParams {
    /// 起始年份
    pub from_year: i32,
    /// 对比年份
    pub to_year: i32,
    /// 政党 A（平局时获胜）
    pub party_a: String,
    /// 政党 B
    pub party_b: String,
    /// 排除的州（大写）
    pub excluded_states: BTreeSet<String>,
    /// 排除的县编码
    pub excluded_fips: BTreeSet<u32>,
    /// 仅保留该投票方式的行
    pub mode: Option<String>,
    pub duplicates: DuplicatePolicy,
}

impl Default for ShiftParams {
    fn default() -> Self {
        ShiftParams {
            from_year: 2016,
            to_year: 2020,
            party_a: "DEMOCRAT".to_string(),
            party_b: "REPUBLICAN".to_string(),
            excluded_states: ["ALASKA", "HAWAII"].iter().map(|s| s.to_string()).collect(),
            excluded_fips: [11001, 51515, 36000].into_iter().collect(),
            mode: None,
            duplicates: DuplicatePolicy::First,
        }
    }
}
