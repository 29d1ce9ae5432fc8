//! # render 命令实现
//!
//! 完整流水线：读取 → 过滤与连接 → 分类 → 渲染地图。
//!
//! ## 功能
//! - 输出 PNG/SVG 地图
//! - 可选导出变化量 CSV
//! - 终端汇总表：指令统计与箭头最长的县
//!
//! ## 依赖关系
//! - 使用 `cli/render.rs` 定义的参数
//! - 使用 `commands/mod.rs` 的 load_shifts
//! - 使用 `map/`, `shift/export.rs`, `utils/output.rs`

use super::{load_shifts, shift_params};
use crate::cli::render::RenderArgs;
use crate::error::{ShiftMapError, Result};
use crate::map::{self, ClassifiedCounty, MapStyle, Palette};
use crate::models::{RenderDirective, Winner};
use crate::parsers;
use crate::shift::export;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct TopRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "FIPS")]
    fips: String,
    #[tabled(rename = "County")]
    county: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Winner")]
    winner: String,
    #[tabled(rename = "Shift (pt)")]
    shift: String,
}

/// 各类绘制指令的数量
#[derive(Debug, Default, PartialEq, Eq)]
struct DirectiveCounts {
    party_a: usize,
    party_b: usize,
    neutral: usize,
}

/// 执行地图渲染
pub fn execute(args: RenderArgs) -> Result<()> {
    output::print_header("County Vote Share Shift Map");

    let params = shift_params(&args.shift)?;
    let style = map_style(&args)?;

    output::print_param("years", &format!("{} -> {}", params.from_year, params.to_year));
    output::print_param("parties", &format!("{} / {}", params.party_a, params.party_b));
    output::print_param(
        "colors",
        &format!("{} / {}", style.palette.party_a, style.palette.party_b),
    );
    output::print_param(
        "figure",
        &format!(
            "{} x {} in @ {} dpi",
            style.width_in, style.height_in, style.dpi
        ),
    );
    output::print_param(
        "arrow scale",
        &format!("{} km/pt ({})", style.km_per_point, style.earth_model),
    );

    output::print_stage(1, 3, "Computing county shifts");
    let shifts = load_shifts(&args.inputs, &params)?;
    if shifts.is_empty() {
        output::print_warning("No counties left after filtering; the map will only show the base layer.");
    }

    output::print_stage(2, 3, "Classifying counties");
    let counties = map::classify_all(shifts, &style.palette);
    let counts = count_directives(&counties);
    output::print_info(&format!(
        "{} arrows for {}, {} for {}, {} neutral markers",
        counts.party_a, params.party_a, counts.party_b, params.party_b, counts.neutral
    ));

    output::print_stage(3, 3, "Rendering map");
    let boundaries = if args.no_basemap {
        Vec::new()
    } else {
        let boundaries = parsers::parse_boundaries_file(&args.boundaries)?;
        output::print_info(&format!(
            "Loaded {} boundary shapes from '{}'",
            boundaries.len(),
            args.boundaries.display()
        ));
        boundaries
    };

    map::render_map(&args.output, &boundaries, &counties, &style)?;
    output::print_success(&format!("Map saved to '{}'", args.output.display()));

    if let Some(ref csv_path) = args.shift_csv {
        export::to_csv(&counties, &params.party_a, &params.party_b, csv_path)?;
        output::print_success(&format!("Shift table saved to '{}'", csv_path.display()));
    }

    let rows = top_rows(&counties, &params.party_a, &params.party_b, args.top_n);
    if !rows.is_empty() {
        output::print_header(&format!("Top {} Shifts by Arrow Length", rows.len()));
        println!("{}", Table::new(&rows));
    }

    Ok(())
}

/// 由命令行参数构建绘图样式
fn map_style(args: &RenderArgs) -> Result<MapStyle> {
    if !(args.km_per_point.is_finite() && args.km_per_point >= 0.0) {
        return Err(ShiftMapError::InvalidArgument(format!(
            "--km-per-point must be a non-negative number, got {}",
            args.km_per_point
        )));
    }
    if args.width_in <= 0.0 || args.height_in <= 0.0 || args.dpi == 0 {
        return Err(ShiftMapError::InvalidArgument(
            "figure size and dpi must be positive".to_string(),
        ));
    }

    Ok(MapStyle {
        width_in: args.width_in,
        height_in: args.height_in,
        dpi: args.dpi,
        km_per_point: args.km_per_point,
        earth_model: args.earth_model,
        palette: Palette {
            party_a: args.party_a_color,
            party_b: args.party_b_color,
            ..Palette::default()
        },
        ..MapStyle::default()
    })
}

fn count_directives(counties: &[ClassifiedCounty]) -> DirectiveCounts {
    counties
        .iter()
        .fold(DirectiveCounts::default(), |mut counts, c| {
            match c.directive {
                RenderDirective::NeutralMarker => counts.neutral += 1,
                RenderDirective::Arrow {
                    winner: Winner::PartyA,
                    ..
                } => counts.party_a += 1,
                RenderDirective::Arrow {
                    winner: Winner::PartyB,
                    ..
                } => counts.party_b += 1,
            }
            counts
        })
}

/// 按箭头长度排序的前 N 个县
fn top_rows(counties: &[ClassifiedCounty], party_a: &str, party_b: &str, n: usize) -> Vec<TopRow> {
    let mut arrows: Vec<(&ClassifiedCounty, Winner, f64)> = counties
        .iter()
        .filter_map(|c| match c.directive {
            RenderDirective::Arrow {
                winner, magnitude, ..
            } => Some((c, winner, magnitude)),
            RenderDirective::NeutralMarker => None,
        })
        .collect();

    // 稳定排序：长度相同时保持输入顺序
    arrows.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    arrows
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, (c, winner, magnitude))| TopRow {
            rank: i + 1,
            fips: c.shift.fips.to_string(),
            county: c.shift.county_name.clone(),
            state: c.shift.state.clone(),
            winner: match winner {
                Winner::PartyA => party_a.to_string(),
                Winner::PartyB => party_b.to_string(),
            },
            shift: format!("{:+.2}", magnitude),
        })
        .collect()
}
