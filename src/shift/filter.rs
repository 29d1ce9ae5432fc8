//! # 选举记录过滤
//!
//! 保留条件：县编码合法、年份为两个目标年份之一、州不在排除列表、
//! 县编码不在排除列表，且（若指定）投票方式匹配。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `shift/mod.rs` 的 ShiftParams

use super::ShiftParams;
use crate::models::ElectionRecord;

/// 判断单条记录是否保留
pub fn is_retained(record: &ElectionRecord, params: &ShiftParams) -> bool {
    let Some(fips) = record.fips else {
        return false;
    };

    if record.year != params.from_year && record.year != params.to_year {
        return false;
    }

    if params.excluded_states.contains(&record.state.to_uppercase()) {
        return false;
    }

    if params.excluded_fips.contains(&fips.code()) {
        return false;
    }

    match (&params.mode, &record.mode) {
        (None, _) => true,
        (Some(wanted), Some(mode)) => wanted.eq_ignore_ascii_case(mode),
        (Some(_), None) => false,
    }
}

/// 过滤记录集合，保持原有顺序
pub fn retain(records: Vec<ElectionRecord>, params: &ShiftParams) -> Vec<ElectionRecord> {
    let total = records.len();
    let retained: Vec<_> = records
        .into_iter()
        .filter(|r| is_retained(r, params))
        .collect();

    log::debug!("Retained {} of {} election rows", retained.len(), total);
    retained
}
