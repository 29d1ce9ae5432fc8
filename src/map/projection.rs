//! # Lambert 等角圆锥投影
//!
//! WGS84 椭球上的双标准纬线 Lambert 等角圆锥投影（Snyder, 1987, §15）。
//! 默认参数：中央经线 -96°，原点纬度 39°，标准纬线 33° 与 45°。
//!
//! ## 依赖关系
//! - 被 `map/canvas.rs` 和 `map/plot.rs` 使用
//! - 无外部 crate 依赖

use std::f64::consts::FRAC_PI_4;

/// WGS84 长半轴 (m)
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 扁率
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// 投影参数（度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertParams {
    pub central_longitude: f64,
    pub central_latitude: f64,
    pub standard_parallels: (f64, f64),
}

impl Default for LambertParams {
    fn default() -> Self {
        LambertParams {
            central_longitude: -96.0,
            central_latitude: 39.0,
            standard_parallels: (33.0, 45.0),
        }
    }
}

/// 已初始化的投影
#[derive(Debug, Clone, Copy)]
pub struct LambertConformal {
    lon0: f64,
    e: f64,
    n: f64,
    af: f64,
    rho0: f64,
}

impl LambertConformal {
    pub fn new(params: LambertParams) -> Self {
        let e = (2.0 * WGS84_F - WGS84_F * WGS84_F).sqrt();
        let phi1 = params.standard_parallels.0.to_radians();
        let phi2 = params.standard_parallels.1.to_radians();
        let phi0 = params.central_latitude.to_radians();

        let m1 = m(phi1, e);
        let m2 = m(phi2, e);
        let t1 = t(phi1, e);
        let t2 = t(phi2, e);

        let n = if (phi1 - phi2).abs() < 1e-12 {
            phi1.sin()
        } else {
            (m1.ln() - m2.ln()) / (t1.ln() - t2.ln())
        };
        let af = WGS84_A * m1 / (n * t1.powf(n));
        let rho0 = af * t(phi0, e).powf(n);

        LambertConformal {
            lon0: params.central_longitude.to_radians(),
            e,
            n,
            af,
            rho0,
        }
    }

    /// (经度, 纬度) → 投影坐标 (x, y)，单位米
    pub fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let phi = latitude.to_radians();
        let rho = self.af * t(phi, self.e).powf(self.n);
        let theta = self.n * wrap_pi(longitude.to_radians() - self.lon0);
        (rho * theta.sin(), self.rho0 - rho * theta.cos())
    }
}

fn m(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    phi.cos() / (1.0 - es * es).sqrt()
}

fn t(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - es) / (1.0 + es)).powf(e / 2.0)
}

/// 将角度差归一化到 [-π, π]
fn wrap_pi(angle: f64) -> f64 {
    use std::f64::consts::PI;
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_zero() {
        let proj = LambertConformal::new(LambertParams::default());
        let (x, y) = proj.project(-96.0, 39.0);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_orientation() {
        let proj = LambertConformal::new(LambertParams::default());
        let (x_west, _) = proj.project(-120.0, 39.0);
        let (x_east, _) = proj.project(-74.0, 39.0);
        let (_, y_north) = proj.project(-96.0, 50.0);
        let (_, y_south) = proj.project(-96.0, 24.0);
        assert!(x_west < 0.0 && x_east > 0.0);
        assert!(y_north > 0.0 && y_south < 0.0);
    }

    #[test]
    fn test_known_distance_scale() {
        // 标准纬线上比例因子为 1：沿 45°N 的 1° 经度约 78.8 km
        let proj = LambertConformal::new(LambertParams::default());
        let (x1, y1) = proj.project(-96.5, 45.0);
        let (x2, y2) = proj.project(-95.5, 45.0);
        let chord = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        assert!((chord - 78_847.0).abs() < 100.0, "chord {}", chord);
    }
}
