//! # 县级选举结果 CSV 解析器
//!
//! ## 格式说明
//! ```text
//! year,state,state_po,county_name,county_fips,office,candidate,party,candidatevotes,totalvotes,version,mode
//! 2016,ALABAMA,AL,AUTAUGA,1001,PRESIDENT,HILLARY CLINTON,DEMOCRAT,5936,24973,20191203,TOTAL
//! ```
//! 必需列: year, state, county_name, county_fips, party, candidatevotes, totalvotes；
//! 可选列: mode；其余列忽略。
//!
//! - 票数为空或 `NA` 时记为缺失（得票率为 NaN）
//! - `county_fips` 格式错误不是致命错误，该记录在过滤阶段被剔除
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/election.rs`
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{ShiftMapError, Result};
use crate::models::{CountyFips, ElectionRecord};

use serde::Deserialize;
use std::path::Path;

const REQUIRED_COLUMNS: &[&str] = &[
    "year",
    "state",
    "county_name",
    "county_fips",
    "party",
    "candidatevotes",
    "totalvotes",
];

/// CSV 原始行
#[derive(Debug, Deserialize)]
struct RawElectionRow {
    year: i32,
    state: String,
    county_name: String,
    county_fips: String,
    party: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    candidatevotes: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    totalvotes: Option<f64>,
    #[serde(default)]
    mode: Option<String>,
}

impl From<RawElectionRow> for ElectionRecord {
    fn from(row: RawElectionRow) -> Self {
        ElectionRecord {
            fips: row.county_fips.parse::<CountyFips>().ok(),
            year: row.year,
            state: row.state,
            county_name: row.county_name,
            party: row.party.to_uppercase(),
            candidate_votes: row.candidatevotes,
            total_votes: row.totalvotes,
            mode: row.mode.filter(|m| !m.is_empty()),
        }
    }
}

/// 解析选举结果文件
pub fn parse_election_file(path: &Path) -> Result<Vec<ElectionRecord>> {
    let content = super::read_input(path)?;
    parse_election_content(&content, &path.display().to_string())
}

/// 从字符串内容解析选举结果
pub fn parse_election_content(content: &str, source: &str) -> Result<Vec<ElectionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ShiftMapError::MissingColumn {
                column: column.to_string(),
                path: source.to_string(),
            });
        }
    }

    let records = reader
        .deserialize::<RawElectionRow>()
        .map(|row| {
            row.map(ElectionRecord::from)
                .map_err(|e| ShiftMapError::ParseError {
                    format: "election CSV".to_string(),
                    path: source.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let malformed = records.iter().filter(|r| r.fips.is_none()).count();
    log::debug!(
        "Loaded {} election rows from {} ({} with malformed county code)",
        records.len(),
        source,
        malformed
    );

    Ok(records)
}
