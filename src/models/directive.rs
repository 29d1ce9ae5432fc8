//! # 绘制指令数据模型
//!
//! 分类器对每个县给出的绘制指令：中性标记或带方向的箭头。
//!
//! ## 依赖关系
//! - 被 `map/classify.rs` 构造
//! - 被 `map/plot.rs` 和 `shift/export.rs` 使用

use std::fmt;
use std::str::FromStr;

/// 获胜政党（两个被追踪政党之一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    PartyA,
    PartyB,
}

/// 箭头罗盘方位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bearing {
    NorthWest,
    NorthEast,
}

impl Bearing {
    /// 自正北顺时针的角度 (°)
    pub fn degrees(&self) -> f64 {
        match self {
            Bearing::NorthWest => 315.0,
            Bearing::NorthEast => 45.0,
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bearing::NorthWest => write!(f, "NW"),
            Bearing::NorthEast => write!(f, "NE"),
        }
    }
}

/// RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapColor(pub u8, pub u8, pub u8);

impl MapColor {
    pub const BLUE: MapColor = MapColor(0x14, 0x60, 0xa8);
    pub const RED: MapColor = MapColor(0xbb, 0x1d, 0x2a);
    pub const GREY: MapColor = MapColor(0x80, 0x80, 0x80);
    pub const LAND: MapColor = MapColor(0xe5, 0xe5, 0xe5);
    pub const WHITE: MapColor = MapColor(0xff, 0xff, 0xff);
}

impl fmt::Display for MapColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for MapColor {
    type Err = String;

    /// 解析 "#rrggbb" 或 "rrggbb"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color '{}'. Use a hex value such as #1460a8", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("Invalid color '{}'. Use a hex value such as #1460a8", s))
        };
        Ok(MapColor(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// 单个县的绘制指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderDirective {
    /// 两个政党份额均下降：灰色小圆点
    NeutralMarker,
    /// 从县中心指向测地线终点的箭头
    Arrow {
        winner: Winner,
        color: MapColor,
        bearing: Bearing,
        /// 获胜政党的变化量（百分点）
        magnitude: f64,
    },
}

impl RenderDirective {
    /// 用于导出和汇总表的简短描述
    pub fn label(&self) -> String {
        match self {
            RenderDirective::NeutralMarker => "neutral".to_string(),
            RenderDirective::Arrow { bearing, .. } => format!("arrow-{}", bearing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!("#1460a8".parse::<MapColor>().unwrap(), MapColor::BLUE);
        assert_eq!("bb1d2a".parse::<MapColor>().unwrap(), MapColor::RED);
        assert!("#12345".parse::<MapColor>().is_err());
        assert!("#gg0000".parse::<MapColor>().is_err());
        assert_eq!(MapColor::LAND.to_string(), "#e5e5e5");
    }

    #[test]
    fn test_bearing_degrees() {
        assert_eq!(Bearing::NorthWest.degrees(), 315.0);
        assert_eq!(Bearing::NorthEast.degrees(), 45.0);
    }
}
