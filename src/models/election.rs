//! # 选举结果数据模型
//!
//! 每行对应 (县, 年份, 政党) 的一条得票记录。
//!
//! ## 依赖关系
//! - 被 `parsers/election.rs` 构造
//! - 被 `shift/` 使用

use super::county::CountyFips;

/// 单条选举记录
#[derive(Debug, Clone, PartialEq)]
pub struct ElectionRecord {
    /// 县编码，编码格式错误时为 None（在过滤阶段剔除）
    pub fips: Option<CountyFips>,
    pub year: i32,
    pub state: String,
    pub county_name: String,
    pub party: String,
    pub candidate_votes: Option<f64>,
    pub total_votes: Option<f64>,
    /// 投票方式（TOTAL, ABSENTEE, ...），旧数据无此列
    pub mode: Option<String>,
}

impl ElectionRecord {
    /// 得票率 (%)，票数缺失或总票数为零时为 NaN
    pub fn percentage_of_vote(&self) -> f64 {
        match (self.candidate_votes, self.total_votes) {
            (Some(c), Some(t)) if t != 0.0 => c / t * 100.0,
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(candidate: Option<f64>, total: Option<f64>) -> ElectionRecord {
        ElectionRecord {
            fips: Some(CountyFips(1001)),
            year: 2020,
            state: "ALABAMA".to_string(),
            county_name: "AUTAUGA".to_string(),
            party: "DEMOCRAT".to_string(),
            candidate_votes: candidate,
            total_votes: total,
            mode: None,
        }
    }

    #[test]
    fn test_percentage_of_vote() {
        assert!((record(Some(40.0), Some(100.0)).percentage_of_vote() - 40.0).abs() < 1e-12);
        assert!((record(Some(1.0), Some(3.0)).percentage_of_vote() - 100.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentage_of_vote_missing_is_nan() {
        assert!(record(None, Some(100.0)).percentage_of_vote().is_nan());
        assert!(record(Some(10.0), None).percentage_of_vote().is_nan());
        assert!(record(Some(10.0), Some(0.0)).percentage_of_vote().is_nan());
        assert!(record(Some(0.0), Some(0.0)).percentage_of_vote().is_nan());
    }
}
