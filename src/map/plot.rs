//! # 选票变化地图渲染
//!
//! 使用 `plotters` 直接在像素坐标的绘图区上作图：
//! - 第 0 层：州边界（浅灰填充，白色边线）
//! - 第 1 层：每个县一个灰色小圆点或一支带三角箭头的箭头
//!
//! 输出格式由扩展名决定：`.svg` 为 SVG，其余为 PNG。已有文件会被覆盖。
//!
//! ## 依赖关系
//! - 被 `commands/render.rs` 调用
//! - 使用 `map/canvas.rs`, `map/geodesic.rs`
//! - 使用 `parsers/boundaries.rs` 的 StateBoundary

use super::canvas::MapCanvas;
use super::geodesic::arrow_endpoint;
use super::projection::LambertConformal;
use super::{ClassifiedCounty, MapStyle};
use crate::error::{ShiftMapError, Result};
use crate::models::{MapColor, RenderDirective};
use crate::parsers::StateBoundary;

use geo::LineString;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 箭头短于此像素长度时不绘制
const MIN_ARROW_PX: f64 = 0.5;

/// 渲染地图并写入文件
pub fn render_map(
    output_path: &Path,
    boundaries: &[StateBoundary],
    counties: &[ClassifiedCounty],
    style: &MapStyle,
) -> Result<()> {
    let size = style.pixel_size();
    let canvas = MapCanvas::new(LambertConformal::new(style.projection), style.extent, size);

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_map(&root, &canvas, boundaries, counties, style)?;
        root.present().map_err(render_error)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_map(&root, &canvas, boundaries, counties, style)?;
        root.present().map_err(render_error)?;
    }
    Ok(())
}

fn render_error<E: std::fmt::Debug>(e: E) -> ShiftMapError {
    ShiftMapError::Render(format!("{:?}", e))
}

fn rgb(color: MapColor) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// 绘制地图的核心逻辑
fn draw_map<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    canvas: &MapCanvas,
    boundaries: &[StateBoundary],
    counties: &[ClassifiedCounty],
    style: &MapStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&rgb(style.background)).map_err(render_error)?;

    // 第 0 层：州边界
    for boundary in boundaries {
        for polygon in &boundary.shape {
            let Some(exterior) = ring_pixels(polygon.exterior(), canvas) else {
                continue;
            };
            draw_ring(root, exterior, rgb(style.land), rgb(style.land_edge))?;

            for interior in polygon.interiors() {
                if let Some(hole) = ring_pixels(interior, canvas) {
                    draw_ring(root, hole, rgb(style.background), rgb(style.land_edge))?;
                }
            }
        }
    }

    // 第 1 层：县级标记与箭头
    let marker_radius = (style.pt_to_px(style.marker_area_pt2.sqrt()) / 2.0)
        .round()
        .max(1.0) as u32;
    let shaft_px = style.pt_to_px(style.shaft_width_pt).round().max(1.0) as u32;
    let head_width = style.pt_to_px(style.head_width_pt);
    let head_length = style.pt_to_px(style.head_length_pt);

    for county in counties {
        let shift = &county.shift;
        match county.directive {
            RenderDirective::NeutralMarker => {
                let center = canvas.to_pixel(shift.longitude, shift.latitude);
                root.draw(&Circle::new(
                    center,
                    marker_radius,
                    rgb(style.palette.neutral).filled(),
                ))
                .map_err(render_error)?;
            }
            RenderDirective::Arrow {
                color,
                bearing,
                magnitude,
                ..
            } => {
                let (end_lat, end_lon) = arrow_endpoint(
                    shift.latitude,
                    shift.longitude,
                    bearing,
                    magnitude,
                    style.km_per_point,
                    style.earth_model,
                );
                let start = canvas.to_pixel_f(shift.longitude, shift.latitude);
                let end = canvas.to_pixel_f(end_lon, end_lat);

                let Some(geometry) = arrow_geometry(start, end, head_width, head_length) else {
                    continue;
                };

                let color = rgb(color);
                root.draw(&PathElement::new(
                    vec![geometry.shaft_start, geometry.shaft_end],
                    color.stroke_width(shaft_px),
                ))
                .map_err(render_error)?;
                root.draw(&Polygon::new(geometry.head.to_vec(), color.filled()))
                    .map_err(render_error)?;
            }
        }
    }

    Ok(())
}

/// 将一个环转换为像素点，完全落在画布外时返回 None
fn ring_pixels(ring: &LineString<f64>, canvas: &MapCanvas) -> Option<Vec<(i32, i32)>> {
    let points: Vec<(i32, i32)> = ring
        .coords()
        .map(|c| canvas.to_pixel(c.x, c.y))
        .collect();
    if points.len() < 3 {
        return None;
    }

    let (w, h) = canvas.size();
    let min_x = points.iter().map(|p| p.0).min()?;
    let max_x = points.iter().map(|p| p.0).max()?;
    let min_y = points.iter().map(|p| p.1).min()?;
    let max_y = points.iter().map(|p| p.1).max()?;
    if max_x < 0 || max_y < 0 || min_x > w as i32 || min_y > h as i32 {
        return None;
    }

    Some(points)
}

fn draw_ring<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: Vec<(i32, i32)>,
    fill: RGBColor,
    edge: RGBColor,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.draw(&Polygon::new(points.clone(), fill.filled()))
        .map_err(render_error)?;
    root.draw(&PathElement::new(points, edge.stroke_width(1)))
        .map_err(render_error)?;
    Ok(())
}

/// 箭头的像素几何
#[derive(Debug, Clone, PartialEq)]
struct ArrowGeometry {
    shaft_start: (i32, i32),
    shaft_end: (i32, i32),
    /// 箭尖、左底角、右底角
    head: [(i32, i32); 3],
}

/// 由起止像素坐标计算箭杆与三角箭头，长度过短返回 None
fn arrow_geometry(
    start: (f64, f64),
    end: (f64, f64),
    head_width: f64,
    head_length: f64,
) -> Option<ArrowGeometry> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length < MIN_ARROW_PX {
        return None;
    }

    let (nx, ny) = (dx / length, dy / length);
    let head_length = head_length.min(length);
    let base = (end.0 - nx * head_length, end.1 - ny * head_length);
    let half = head_width / 2.0;
    // 垂直方向
    let (px, py) = (-ny, nx);

    let round = |p: (f64, f64)| (p.0.round() as i32, p.1.round() as i32);
    Some(ArrowGeometry {
        shaft_start: round(start),
        shaft_end: round(base),
        head: [
            round(end),
            round((base.0 + px * half, base.1 + py * half)),
            round((base.0 - px * half, base.1 - py * half)),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::classify_all;
    use crate::models::{CountyFips, CountyShift};
    use crate::parsers::boundaries::parse_boundaries_content;

    #[test]
    fn test_arrow_geometry_basic() {
        let g = arrow_geometry((0.0, 0.0), (100.0, 0.0), 10.0, 20.0).unwrap();
        assert_eq!(g.shaft_start, (0, 0));
        assert_eq!(g.shaft_end, (80, 0));
        assert_eq!(g.head[0], (100, 0));
        assert_eq!(g.head[1], (80, 5));
        assert_eq!(g.head[2], (80, -5));
    }

    #[test]
    fn test_arrow_geometry_short_arrow_clamps_head() {
        let g = arrow_geometry((10.0, 10.0), (10.0, 5.0), 4.0, 20.0).unwrap();
        assert_eq!(g.shaft_start, (10, 10));
        assert_eq!(g.shaft_end, (10, 10));
        assert_eq!(g.head[0], (10, 5));
    }

    #[test]
    fn test_arrow_geometry_zero_length() {
        assert!(arrow_geometry((3.0, 3.0), (3.0, 3.2), 4.0, 20.0).is_none());
    }

    #[test]
    fn test_render_png_to_temp_file() {
        let boundaries = parse_boundaries_content(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"name": "Block"},
                 "geometry": {"type": "Polygon", "coordinates": [[[-110.0, 30.0], [-85.0, 30.0], [-85.0, 45.0], [-110.0, 45.0], [-110.0, 30.0]],
                                                                 [[-100.0, 35.0], [-95.0, 35.0], [-95.0, 40.0], [-100.0, 35.0]]]}},
                {"type": "Feature", "properties": {"name": "Far away"},
                 "geometry": {"type": "Polygon", "coordinates": [[[10.0, 50.0], [11.0, 50.0], [11.0, 51.0], [10.0, 50.0]]]}}
            ]}"#,
        )
        .unwrap();

        let shift = |fips: u32, a: f64, b: f64, lat: f64, lon: f64| CountyShift {
            fips: CountyFips(fips),
            state: "TEST".to_string(),
            county_name: format!("C{}", fips),
            shift_a: a,
            shift_b: b,
            latitude: lat,
            longitude: lon,
        };
        let style = MapStyle {
            width_in: 3.0,
            height_in: 2.0,
            dpi: 100,
            ..MapStyle::default()
        };
        let counties = classify_all(
            vec![
                shift(1, 15.0, -15.0, 30.0, -90.0),
                shift(2, -1.0, 4.0, 40.0, -100.0),
                shift(3, -1.0, -2.0, 35.0, -95.0),
                shift(4, 0.0, 0.0, 38.0, -80.0),
            ],
            &style.palette,
        );

        let path = std::env::temp_dir().join(format!("shiftmap_test_{}.png", std::process::id()));
        render_map(&path, &boundaries, &counties, &style).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_svg_to_temp_file() {
        let style = MapStyle {
            width_in: 2.0,
            height_in: 2.0,
            dpi: 72,
            ..MapStyle::default()
        };
        let counties = classify_all(
            vec![CountyShift {
                fips: CountyFips(12345),
                state: "LOUISIANA".to_string(),
                county_name: "X".to_string(),
                shift_a: 15.0,
                shift_b: -15.0,
                latitude: 30.0,
                longitude: -90.0,
            }],
            &style.palette,
        );

        let path = std::env::temp_dir().join(format!("shiftmap_test_{}.svg", std::process::id()));
        render_map(&path, &[], &counties, &style).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.to_lowercase().contains("#1460a8"));
        let _ = std::fs::remove_file(&path);
    }
}
