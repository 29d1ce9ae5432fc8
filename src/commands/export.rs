//! # export 命令实现
//!
//! 只执行读取与计算阶段，将每个县的变化量和绘制指令写入 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `commands/mod.rs` 的 load_shifts
//! - 使用 `shift/export.rs`

use super::{load_shifts, shift_params};
use crate::cli::export::ExportArgs;
use crate::error::Result;
use crate::map::{self, Palette};
use crate::shift::export;
use crate::utils::output;

/// 执行导出
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Export County Vote Share Shifts");

    let params = shift_params(&args.shift)?;
    let shifts = load_shifts(&args.inputs, &params)?;

    if shifts.is_empty() {
        output::print_warning("No counties left after filtering; writing header only.");
    }

    let counties = map::classify_all(shifts, &Palette::default());
    export::to_csv(&counties, &params.party_a, &params.party_b, &args.output)?;

    output::print_success(&format!(
        "{} counties written to '{}'",
        counties.len(),
        args.output.display()
    ));
    Ok(())
}
