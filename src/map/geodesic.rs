//! # 箭头测地线终点
//!
//! 从县中心沿给定方位行进 `magnitude × km_per_point` 公里，
//! 求解直接测地线问题得到箭头终点。
//!
//! ## 地球模型
//! - `Haversine`: 球面大圆，平均半径 6371.0088 km（默认）
//! - `Geodesic`: WGS84 椭球（Karney 算法）
//!
//! ## 依赖关系
//! - 被 `map/plot.rs` 使用
//! - 使用 `geo` 的 Destination 度量

use crate::models::Bearing;

use clap::ValueEnum;
use geo::{Destination, Geodesic, Haversine, Point};

/// 地球模型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum EarthModel {
    /// Great circle on a sphere of mean Earth radius
    #[default]
    Haversine,
    /// WGS84 ellipsoid
    Geodesic,
}

impl std::fmt::Display for EarthModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EarthModel::Haversine => write!(f, "haversine"),
            EarthModel::Geodesic => write!(f, "geodesic"),
        }
    }
}

/// 计算箭头终点，返回 (纬度, 经度)
pub fn arrow_endpoint(
    latitude: f64,
    longitude: f64,
    bearing: Bearing,
    magnitude: f64,
    km_per_point: f64,
    model: EarthModel,
) -> (f64, f64) {
    let origin = Point::new(longitude, latitude);
    let meters = magnitude * km_per_point * 1000.0;

    let end = match model {
        EarthModel::Haversine => Haversine.destination(origin, bearing.degrees(), meters),
        EarthModel::Geodesic => Geodesic.destination(origin, bearing.degrees(), meters),
    };

    (end.y(), end.x())
}
