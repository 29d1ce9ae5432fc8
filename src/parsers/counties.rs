//! # 县坐标 CSV 解析器
//!
//! ## 格式说明
//! ```text
//! fips,name,lat,lon
//! 1001,Autauga,32.53,-86.64
//! ```
//! 第一列始终作为县编码（与列名无关），纬度列名为 `lat`/`latitude`，
//! 经度列名为 `lon`/`lng`/`longitude`（不区分大小写）。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/county.rs`
//! - 使用 `csv` 读取

use crate::error::{ShiftMapError, Result};
use crate::models::{CountyFips, CountyPosition};

use std::collections::HashMap;
use std::path::Path;

const LAT_COLUMNS: &[&str] = &["lat", "latitude"];
const LON_COLUMNS: &[&str] = &["lon", "lng", "longitude"];

/// 解析县坐标文件
pub fn parse_counties_file(path: &Path) -> Result<HashMap<CountyFips, CountyPosition>> {
    let content = super::read_input(path)?;
    parse_counties_content(&content, &path.display().to_string())
}

/// 从字符串内容解析县坐标表
pub fn parse_counties_content(
    content: &str,
    source: &str,
) -> Result<HashMap<CountyFips, CountyPosition>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let lat_idx = find_column(&headers, LAT_COLUMNS, source)?;
    let lon_idx = find_column(&headers, LON_COLUMNS, source)?;

    let mut positions = HashMap::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // 表头占第 1 行
        let line = row + 2;

        let fips: CountyFips = field(&record, 0, line, source)?
            .parse()
            .map_err(|reason| parse_error(source, line, reason))?;
        let latitude = parse_coordinate(&record, lat_idx, line, source)?;
        let longitude = parse_coordinate(&record, lon_idx, line, source)?;

        positions.insert(
            fips,
            CountyPosition {
                fips,
                latitude,
                longitude,
            },
        );
    }

    log::debug!("Loaded {} county positions from {}", positions.len(), source);
    Ok(positions)
}

fn find_column(headers: &csv::StringRecord, names: &[&str], source: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        .ok_or_else(|| ShiftMapError::MissingColumn {
            column: names[0].to_string(),
            path: source.to_string(),
        })
}

fn field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    line: usize,
    source: &str,
) -> Result<&'r str> {
    record
        .get(idx)
        .ok_or_else(|| parse_error(source, line, format!("missing field {}", idx + 1)))
}

fn parse_coordinate(
    record: &csv::StringRecord,
    idx: usize,
    line: usize,
    source: &str,
) -> Result<f64> {
    let raw = field(record, idx, line, source)?;
    raw.parse::<f64>()
        .map_err(|_| parse_error(source, line, format!("invalid coordinate '{}'", raw)))
}

fn parse_error(source: &str, line: usize, reason: String) -> ShiftMapError {
    ShiftMapError::ParseError {
        format: "county coordinate".to_string(),
        path: source.to_string(),
        reason: format!("line {}: {}", line, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counties_basic() {
        let content = "\
fips,name,lat,lon
1001,Autauga,32.5349,-86.6428
12345,Somewhere,30.0,-90.0
";
        let positions = parse_counties_content(content, "test").unwrap();
        assert_eq!(positions.len(), 2);

        let p = positions[&CountyFips(12345)];
        assert_eq!(p.latitude, 30.0);
        assert_eq!(p.longitude, -90.0);
        assert!((positions[&CountyFips(1001)].latitude - 32.5349).abs() < 1e-9);
    }

    #[test]
    fn test_parse_counties_alternate_headers() {
        let content = "\
county,Longitude,Latitude
01001.0,-86.6,32.5
";
        let positions = parse_counties_content(content, "test").unwrap();
        let p = positions[&CountyFips(1001)];
        assert_eq!(p.latitude, 32.5);
        assert_eq!(p.longitude, -86.6);
    }

    #[test]
    fn test_parse_counties_missing_column() {
        let content = "fips,lat\n1001,32.5\n";
        let err = parse_counties_content(content, "test").unwrap_err();
        assert!(matches!(err, ShiftMapError::MissingColumn { ref column, .. } if column == "lon"));
    }

    #[test]
    fn test_parse_counties_bad_value_is_fatal() {
        let content = "fips,lat,lon\n1001,north,-86.6\n";
        assert!(parse_counties_content(content, "test").is_err());

        let content = "fips,lat,lon\nNA,32.5,-86.6\n";
        assert!(parse_counties_content(content, "test").is_err());
    }
}
