//! # 得票率索引
//!
//! 一次遍历建立 (县, 年份, 政党) → 得票率 的哈希索引，
//! 重复键按 `DuplicatePolicy` 处理。
//!
//! ## 依赖关系
//! - 被 `shift/compute.rs` 使用
//! - 使用 `models/election.rs`

use super::DuplicatePolicy;
use crate::error::{ShiftMapError, Result};
use crate::models::{CountyFips, ElectionRecord};

use std::collections::hash_map::Entry;
use std::collections::HashMap;

type IndexKey = (CountyFips, i32, String);

/// (县, 年份, 政党) → 得票率 (%)
#[derive(Debug, Default)]
pub struct VoteShareIndex {
    shares: HashMap<IndexKey, f64>,
}

impl VoteShareIndex {
    /// 从记录建立索引，编码缺失的记录被忽略
    pub fn build(records: &[ElectionRecord], policy: DuplicatePolicy) -> Result<Self> {
        let mut shares: HashMap<IndexKey, f64> = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;

        for record in records {
            let Some(fips) = record.fips else {
                continue;
            };
            let key = (fips, record.year, record.party.to_uppercase());
            let pct = record.percentage_of_vote();

            match shares.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(pct);
                }
                Entry::Occupied(mut slot) => {
                    duplicates += 1;
                    match policy {
                        DuplicatePolicy::First => {}
                        DuplicatePolicy::Last => {
                            slot.insert(pct);
                        }
                        DuplicatePolicy::Reject => {
                            let (fips, year, party) = slot.key().clone();
                            return Err(ShiftMapError::DuplicateRecord {
                                fips: fips.code(),
                                year,
                                party,
                            });
                        }
                    }
                }
            }
        }

        if duplicates > 0 {
            log::debug!(
                "{} duplicate (county, year, party) rows resolved with {:?}",
                duplicates,
                policy
            );
        }

        Ok(VoteShareIndex { shares })
    }

    /// 查询得票率
    pub fn get(&self, fips: CountyFips, year: i32, party: &str) -> Option<f64> {
        self.shares
            .get(&(fips, year, party.to_uppercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fips: u32, year: i32, party: &str, votes: f64, total: f64) -> ElectionRecord {
        ElectionRecord {
            fips: Some(CountyFips(fips)),
            year,
            state: "OHIO".to_string(),
            county_name: "FRANKLIN".to_string(),
            party: party.to_string(),
            candidate_votes: Some(votes),
            total_votes: Some(total),
            mode: None,
        }
    }

    fn duplicated() -> Vec<ElectionRecord> {
        vec![
            record(39049, 2020, "DEMOCRAT", 10.0, 100.0),
            record(39049, 2020, "REPUBLICAN", 30.0, 100.0),
            record(39049, 2020, "DEMOCRAT", 60.0, 100.0),
        ]
    }

    #[test]
    fn test_index_lookup() {
        let index = VoteShareIndex::build(&duplicated()[..2], DuplicatePolicy::First).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(CountyFips(39049), 2020, "DEMOCRAT"), Some(10.0));
        assert_eq!(index.get(CountyFips(39049), 2020, "democrat"), Some(10.0));
        assert_eq!(index.get(CountyFips(39049), 2016, "DEMOCRAT"), None);
        assert_eq!(index.get(CountyFips(1), 2020, "DEMOCRAT"), None);
    }

    #[test]
    fn test_duplicate_first_wins() {
        let index = VoteShareIndex::build(&duplicated(), DuplicatePolicy::First).unwrap();
        assert_eq!(index.get(CountyFips(39049), 2020, "DEMOCRAT"), Some(10.0));
    }

    #[test]
    fn test_duplicate_last_wins() {
        let index = VoteShareIndex::build(&duplicated(), DuplicatePolicy::Last).unwrap();
        assert_eq!(index.get(CountyFips(39049), 2020, "DEMOCRAT"), Some(60.0));
    }

    #[test]
    fn test_duplicate_reject() {
        let err = VoteShareIndex::build(&duplicated(), DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            ShiftMapError::DuplicateRecord { fips: 39049, year: 2020, ref party } if party == "DEMOCRAT"
        ));
    }

    #[test]
    fn test_nan_share_is_stored() {
        let records = vec![record(1, 2016, "DEMOCRAT", 5.0, 0.0)];
        let index = VoteShareIndex::build(&records, DuplicatePolicy::First).unwrap();
        assert!(index.get(CountyFips(1), 2016, "DEMOCRAT").unwrap().is_nan());
    }
}
