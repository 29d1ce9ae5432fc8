//! # 县级变化量计算
//!
//! 对过滤后的记录按县去重（保持首次出现顺序），
//! 计算 `pct(to_year) - pct(from_year)`，并连接县坐标。
//!
//! ## 规则
//! - 任一年份缺失或得票率为 NaN 时，该政党变化量为 0
//! - 州名与县名取该县第一条保留记录
//! - 坐标表中找不到县编码为致命错误
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `shift/index.rs` 的 VoteShareIndex

use super::{ShiftParams, VoteShareIndex};
use crate::error::{ShiftMapError, Result};
use crate::models::{CountyFips, CountyPosition, CountyShift, ElectionRecord};

use std::collections::{HashMap, HashSet};

/// 单个政党在两届之间的得票率变化
pub fn party_shift(
    index: &VoteShareIndex,
    fips: CountyFips,
    party: &str,
    from_year: i32,
    to_year: i32,
) -> f64 {
    match (
        index.get(fips, from_year, party),
        index.get(fips, to_year, party),
    ) {
        (Some(before), Some(after)) if before.is_finite() && after.is_finite() => after - before,
        _ => 0.0,
    }
}

/// 计算所有县的变化结果
pub fn compute_shifts(
    retained: &[ElectionRecord],
    index: &VoteShareIndex,
    positions: &HashMap<CountyFips, CountyPosition>,
    params: &ShiftParams,
) -> Result<Vec<CountyShift>> {
    // 按首次出现顺序去重
    let (_, counties) = retained.iter().fold(
        (HashSet::new(), Vec::new()),
        |(mut seen, mut counties), record| {
            if let Some(fips) = record.fips {
                if seen.insert(fips) {
                    counties.push((fips, record));
                }
            }
            (seen, counties)
        },
    );

    let shifts = counties
        .into_iter()
        .map(|(fips, first)| -> Result<CountyShift> {
            let position = positions
                .get(&fips)
                .ok_or(ShiftMapError::CountyNotFound { fips: fips.code() })?;

            Ok(CountyShift {
                fips,
                state: first.state.clone(),
                county_name: first.county_name.clone(),
                shift_a: party_shift(index, fips, &params.party_a, params.from_year, params.to_year),
                shift_b: party_shift(index, fips, &params.party_b, params.from_year, params.to_year),
                latitude: position.latitude,
                longitude: position.longitude,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Computed shifts for {} counties", shifts.len());
    Ok(shifts)
}
