//! # 地图画布坐标变换
//!
//! 将经纬度经投影后映射到像素坐标：
//! 1. 对经纬度范围矩形的四条边密集采样并投影，取投影坐标包围盒
//! 2. 等比例缩放包围盒以适配画布，居中放置
//!
//! ## 依赖关系
//! - 被 `map/plot.rs` 使用
//! - 使用 `map/projection.rs`

use super::projection::LambertConformal;

/// 每条边的采样点数
const EDGE_SAMPLES: usize = 64;

/// 经纬度范围 (PlateCarree)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExtent {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Default for GeoExtent {
    fn default() -> Self {
        GeoExtent {
            lon_min: -120.0,
            lon_max: -74.0,
            lat_min: 24.0,
            lat_max: 50.0,
        }
    }
}

impl GeoExtent {
    /// 沿范围边界采样的经纬度点
    fn boundary_samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..=EDGE_SAMPLES).flat_map(move |i| {
            let f = i as f64 / EDGE_SAMPLES as f64;
            let lon = self.lon_min + f * (self.lon_max - self.lon_min);
            let lat = self.lat_min + f * (self.lat_max - self.lat_min);
            [
                (lon, self.lat_min),
                (lon, self.lat_max),
                (self.lon_min, lat),
                (self.lon_max, lat),
            ]
        })
    }
}

/// 投影坐标 → 像素坐标变换
#[derive(Debug, Clone, Copy)]
pub struct MapCanvas {
    projection: LambertConformal,
    x_min: f64,
    y_max: f64,
    scale: f64,
    offset: (f64, f64),
    size: (u32, u32),
}

impl MapCanvas {
    pub fn new(projection: LambertConformal, extent: GeoExtent, size: (u32, u32)) -> Self {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for (lon, lat) in extent.boundary_samples() {
            let (x, y) = projection.project(lon, lat);
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let width = (x_max - x_min).max(f64::EPSILON);
        let height = (y_max - y_min).max(f64::EPSILON);
        let scale = (size.0 as f64 / width).min(size.1 as f64 / height);
        let offset = (
            (size.0 as f64 - width * scale) / 2.0,
            (size.1 as f64 - height * scale) / 2.0,
        );

        MapCanvas {
            projection,
            x_min,
            y_max,
            scale,
            offset,
            size,
        }
    }

    /// 经纬度 → 浮点像素坐标
    pub fn to_pixel_f(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let (x, y) = self.projection.project(longitude, latitude);
        (
            self.offset.0 + (x - self.x_min) * self.scale,
            self.offset.1 + (self.y_max - y) * self.scale,
        )
    }

    /// 经纬度 → 整数像素坐标
    pub fn to_pixel(&self, longitude: f64, latitude: f64) -> (i32, i32) {
        let (px, py) = self.to_pixel_f(longitude, latitude);
        (px.round() as i32, py.round() as i32)
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}
