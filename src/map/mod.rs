//! # 地图绘制模块
//!
//! 将县级变化结果分类为绘制指令，并在 Lambert 投影底图上绘制。
//!
//! ## 子模块
//! - `classify`: 中性标记 / 箭头分类
//! - `geodesic`: 箭头测地线终点
//! - `projection`: Lambert 等角圆锥投影
//! - `canvas`: 投影坐标到像素的变换
//! - `plot`: 使用 `plotters` 渲染 PNG/SVG
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/` 与 `parsers/boundaries.rs`

pub mod canvas;
pub mod classify;
pub mod geodesic;
pub mod plot;
pub mod projection;

pub use canvas::GeoExtent;
pub use classify::classify;
pub use geodesic::EarthModel;
pub use plot::render_map;

use crate::models::{CountyShift, MapColor, RenderDirective};
use projection::LambertParams;

/// 政党与中性标记配色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub party_a: MapColor,
    pub party_b: MapColor,
    pub neutral: MapColor,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            party_a: MapColor::BLUE,
            party_b: MapColor::RED,
            neutral: MapColor::GREY,
        }
    }
}

/// 图幅、底图与箭头样式
#[derive(Debug, Clone)]
pub struct MapStyle {
    /// 图幅宽度（英寸）
    pub width_in: f64,
    /// 图幅高度（英寸）
    pub height_in: f64,
    pub dpi: u32,
    /// 每个百分点对应的箭头长度 (km)
    pub km_per_point: f64,
    pub earth_model: EarthModel,
    /// 箭杆宽度 (pt)
    pub shaft_width_pt: f64,
    /// 箭头宽度 (pt)
    pub head_width_pt: f64,
    /// 箭头长度 (pt)
    pub head_length_pt: f64,
    /// 中性标记面积 (pt²)
    pub marker_area_pt2: f64,
    pub background: MapColor,
    pub land: MapColor,
    pub land_edge: MapColor,
    pub palette: Palette,
    pub extent: GeoExtent,
    pub projection: LambertParams,
}

impl Default for MapStyle {
    fn default() -> Self {
        MapStyle {
            width_in: 12.0,
            height_in: 8.0,
            dpi: 300,
            km_per_point: 25.0,
            earth_model: EarthModel::Haversine,
            shaft_width_pt: 0.2,
            head_width_pt: 3.0,
            head_length_pt: 5.0,
            marker_area_pt2: 0.5,
            background: MapColor::WHITE,
            land: MapColor::LAND,
            land_edge: MapColor::WHITE,
            palette: Palette::default(),
            extent: GeoExtent::default(),
            projection: LambertParams::default(),
        }
    }
}

impl MapStyle {
    /// 输出图像像素尺寸
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// 点 (1/72 英寸) → 像素
    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi as f64 / 72.0
    }
}

/// 带绘制指令的县
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedCounty {
    pub shift: CountyShift,
    pub directive: RenderDirective,
}

/// 按输入顺序分类所有县
pub fn classify_all(shifts: Vec<CountyShift>, palette: &Palette) -> Vec<ClassifiedCounty> {
    shifts
        .into_iter()
        .map(|shift| {
            let directive = classify(shift.shift_a, shift.shift_b, palette);
            ClassifiedCounty { shift, directive }
        })
        .collect()
}
