//! # render 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/render.rs`

use super::inputs::{InputArgs, ShiftArgs};
use crate::map::EarthModel;
use crate::models::MapColor;

use clap::Parser;
use std::path::PathBuf;

/// render 子命令参数
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// State boundary GeoJSON for the base map
    #[arg(long, default_value = "./data/us_states.geojson")]
    pub boundaries: PathBuf,

    /// Draw counties without the state base map
    #[arg(long, default_value_t = false)]
    pub no_basemap: bool,

    /// Output image (.png or .svg); overwritten if it exists
    #[arg(short, long, default_value = "electionshiftmap.png")]
    pub output: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // 箭头与图幅
    // ─────────────────────────────────────────────────────────────
    /// Arrow length in km per percentage point of shift
    #[arg(long, default_value_t = 25.0)]
    pub km_per_point: f64,

    /// Earth model for the arrow endpoint
    #[arg(long, value_enum, default_value = "haversine")]
    pub earth_model: EarthModel,

    /// Figure width in inches
    #[arg(long, default_value_t = 12.0)]
    pub width_in: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = 8.0)]
    pub height_in: f64,

    /// Output resolution (dots per inch)
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Arrow color for the first party
    #[arg(long, default_value = "#1460a8")]
    pub party_a_color: MapColor,

    /// Arrow color for the second party
    #[arg(long, default_value = "#bb1d2a")]
    pub party_b_color: MapColor,

    // ─────────────────────────────────────────────────────────────
    // 附加输出
    // ─────────────────────────────────────────────────────────────
    /// Also write the county shift table to this CSV
    #[arg(long)]
    pub shift_csv: Option<PathBuf>,

    /// Number of largest arrows listed in the summary
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,
}

impl Default for RenderArgs {
    fn default() -> Self {
        RenderArgs::parse_from(["render"])
    }
}
