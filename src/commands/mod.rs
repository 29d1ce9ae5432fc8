//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，以及两者共用的读取 / 过滤 / 计算阶段。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `shift/`, `map/`, `utils/`
//! - 子模块: render, export

pub mod export;
pub mod render;

use crate::cli::inputs::{InputArgs, ShiftArgs};
use crate::cli::render::RenderArgs;
use crate::cli::Commands;
use crate::error::{ShiftMapError, Result};
use crate::models::CountyShift;
use crate::parsers;
use crate::shift::{self, ShiftParams, VoteShareIndex};
use crate::utils::{output, progress};

/// 执行命令，未指定子命令时按默认参数渲染
pub fn run(cmd: Option<Commands>) -> Result<()> {
    match cmd {
        Some(Commands::Render(args)) => render::execute(args),
        Some(Commands::Export(args)) => export::execute(args),
        None => render::execute(RenderArgs::default()),
    }
}

/// 命令行参数 → 计算参数
pub fn shift_params(args: &ShiftArgs) -> Result<ShiftParams> {
    if args.from_year == args.to_year {
        return Err(ShiftMapError::InvalidArgument(format!(
            "--from-year and --to-year are both {}",
            args.from_year
        )));
    }
    if args.party_a.eq_ignore_ascii_case(&args.party_b) {
        return Err(ShiftMapError::InvalidArgument(format!(
            "--party-a and --party-b are both '{}'",
            args.party_a
        )));
    }

    Ok(ShiftParams {
        from_year: args.from_year,
        to_year: args.to_year,
        party_a: args.party_a.to_uppercase(),
        party_b: args.party_b.to_uppercase(),
        excluded_states: args.exclude_states.iter().map(|s| s.to_uppercase()).collect(),
        excluded_fips: args.exclude_fips.iter().copied().collect(),
        mode: args.mode.clone(),
        duplicates: args.duplicates,
    })
}

/// 阶段 1-2：读取输入、过滤、建立索引并计算每个县的变化量
pub fn load_shifts(inputs: &InputArgs, params: &ShiftParams) -> Result<Vec<CountyShift>> {
    output::print_info(&format!(
        "Reading county positions from '{}'",
        inputs.counties.display()
    ));
    let positions = parsers::parse_counties_file(&inputs.counties)?;

    output::print_info(&format!(
        "Reading election results from '{}'",
        inputs.elections.display()
    ));
    let records = progress::with_spinner("Parsing election results", || {
        parsers::parse_election_file(&inputs.elections)
    })?;
    output::print_info(&format!(
        "Loaded {} positions, {} election rows",
        positions.len(),
        records.len()
    ));

    let retained = shift::retain(records, params);
    let index = VoteShareIndex::build(&retained, params.duplicates)?;
    log::debug!("Vote share index holds {} keys", index.len());

    let shifts = shift::compute_shifts(&retained, &index, &positions, params)?;
    output::print_info(&format!(
        "{} counties between {} and {} after filtering",
        shifts.len(),
        params.from_year,
        params.to_year
    ));

    Ok(shifts)
}
