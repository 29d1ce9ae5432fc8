//! # 县级数据模型
//!
//! 县 FIPS 编码、县坐标以及县级选票变化结果。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `shift/`, `map/` 使用
//! - 无外部模块依赖

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 县 FIPS 编码（连接键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountyFips(pub u32);

impl CountyFips {
    pub fn code(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CountyFips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

impl FromStr for CountyFips {
    type Err = String;

    /// 接受 "1001", "01001" 以及 pandas 写出的 "1001.0"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return Ok(CountyFips(code));
        }

        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => {
                Ok(CountyFips(v as u32))
            }
            _ => Err(format!("malformed county code '{}'", s)),
        }
    }
}

/// 县中心坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountyPosition {
    pub fips: CountyFips,
    pub latitude: f64,
    pub longitude: f64,
}

/// 单个县的选票份额变化（百分点）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyShift {
    pub fips: CountyFips,
    pub state: String,
    pub county_name: String,
    /// 政党 A 的变化
    pub shift_a: f64,
    /// 政党 B 的变化
    pub shift_b: f64,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fips_parse() {
        assert_eq!("1001".parse::<CountyFips>().unwrap(), CountyFips(1001));
        assert_eq!("01001".parse::<CountyFips>().unwrap(), CountyFips(1001));
        assert_eq!(" 46102.0 ".parse::<CountyFips>().unwrap(), CountyFips(46102));
        assert!("".parse::<CountyFips>().is_err());
        assert!("NA".parse::<CountyFips>().is_err());
        assert!("1001.5".parse::<CountyFips>().is_err());
        assert!("-3".parse::<CountyFips>().is_err());
    }

    #[test]
    fn test_fips_display_is_zero_padded() {
        assert_eq!(CountyFips(1001).to_string(), "01001");
        assert_eq!(CountyFips(12345).to_string(), "12345");
    }
}
