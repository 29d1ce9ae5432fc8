//! # 共享输入参数
//!
//! `render` 与 `export` 共用的输入文件与过滤参数。
//!
//! ## 依赖关系
//! - 被 `cli/render.rs`, `cli/export.rs` 展开 (flatten)
//! - 由 `commands/mod.rs` 转换为 `ShiftParams`

use crate::shift::DuplicatePolicy;

use clap::Args;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 输入文件
// ─────────────────────────────────────────────────────────────

/// 输入数据文件
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// County coordinate CSV (first column: county FIPS; columns lat, lon)
    #[arg(long, default_value = "./data/counties.csv")]
    pub counties: PathBuf,

    /// County presidential results CSV (MIT Election Lab layout)
    #[arg(long, default_value = "./data/countypres_2000-2020.csv")]
    pub elections: PathBuf,
}

// ─────────────────────────────────────────────────────────────
// 过滤与变化量参数
// ─────────────────────────────────────────────────────────────

/// 过滤与变化量参数
#[derive(Args, Debug, Clone)]
pub struct ShiftArgs {
    /// Baseline election year
    #[arg(long, default_value_t = 2016)]
    pub from_year: i32,

    /// Comparison election year
    #[arg(long, default_value_t = 2020)]
    pub to_year: i32,

    /// First tracked party (wins ties, drawn north-west)
    #[arg(long, default_value = "DEMOCRAT")]
    pub party_a: String,

    /// Second tracked party (drawn north-east)
    #[arg(long, default_value = "REPUBLICAN")]
    pub party_b: String,

    /// State names to exclude (repeatable)
    #[arg(long = "exclude-state", default_values = ["ALASKA", "HAWAII"])]
    pub exclude_states: Vec<String>,

    /// County FIPS codes to exclude (repeatable)
    #[arg(long = "exclude-fips", default_values = ["11001", "51515", "36000"])]
    pub exclude_fips: Vec<u32>,

    /// Only keep rows with this voting mode (e.g. TOTAL)
    #[arg(long)]
    pub mode: Option<String>,

    /// How to resolve repeated (county, year, party) rows
    #[arg(long, value_enum, default_value = "first")]
    pub duplicates: DuplicatePolicy,
}
