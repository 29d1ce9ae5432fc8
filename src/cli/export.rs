//! # export 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use super::inputs::{InputArgs, ShiftArgs};

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Output CSV path
    #[arg(short, long, default_value = "county_shift.csv")]
    pub output: PathBuf,
}
