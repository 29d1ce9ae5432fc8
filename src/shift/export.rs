//! # 变化结果导出
//!
//! 将每个县的变化量与绘制指令导出为 CSV。
//!
//! ## 列
//! `fips, state, county_name, shift_<A>, shift_<B>, lat, lon, directive`
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 和 `commands/render.rs` 调用
//! - 使用 `map/mod.rs` 的 ClassifiedCounty
//! - 使用 `csv` 库写入

use crate::error::{ShiftMapError, Result};
use crate::map::ClassifiedCounty;

use std::io::Write;
use std::path::Path;

/// 导出到文件
pub fn to_csv(
    counties: &[ClassifiedCounty],
    party_a: &str,
    party_b: &str,
    output_path: &Path,
) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| ShiftMapError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_csv(counties, party_a, party_b, file)
}

/// 写入任意 writer
pub fn write_csv<W: Write>(
    counties: &[ClassifiedCounty],
    party_a: &str,
    party_b: &str,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "fips".to_string(),
        "state".to_string(),
        "county_name".to_string(),
        format!("shift_{}", party_a.to_lowercase()),
        format!("shift_{}", party_b.to_lowercase()),
        "lat".to_string(),
        "lon".to_string(),
        "directive".to_string(),
    ])?;

    for county in counties {
        let s = &county.shift;
        wtr.write_record([
            s.fips.to_string(),
            s.state.clone(),
            s.county_name.clone(),
            format!("{:.6}", s.shift_a),
            format!("{:.6}", s.shift_b),
            format!("{:.6}", s.latitude),
            format!("{:.6}", s.longitude),
            county.directive.label(),
        ])?;
    }

    wtr.flush().map_err(|e| ShiftMapError::CsvError(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{classify_all, Palette};
    use crate::models::{CountyFips, CountyShift};

    #[test]
    fn test_write_csv() {
        let counties = classify_all(
            vec![
                CountyShift {
                    fips: CountyFips(1001),
                    state: "ALABAMA".to_string(),
                    county_name: "AUTAUGA".to_string(),
                    shift_a: 0.5,
                    shift_b: -2.25,
                    latitude: 32.5,
                    longitude: -86.6,
                },
                CountyShift {
                    fips: CountyFips(12345),
                    state: "LOUISIANA".to_string(),
                    county_name: "SOMEWHERE, EAST".to_string(),
                    shift_a: -1.0,
                    shift_b: -1.0,
                    latitude: 30.0,
                    longitude: -90.0,
                },
            ],
            &Palette::default(),
        );

        let mut buf = Vec::new();
        write_csv(&counties, "DEMOCRAT", "REPUBLICAN", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "fips,state,county_name,shift_democrat,shift_republican,lat,lon,directive"
        );
        assert_eq!(
            lines[1],
            "01001,ALABAMA,AUTAUGA,0.500000,-2.250000,32.500000,-86.600000,arrow-NW"
        );
        assert_eq!(
            lines[2],
            "12345,LOUISIANA,\"SOMEWHERE, EAST\",-1.000000,-1.000000,30.000000,-90.000000,neutral"
        );
    }
}
