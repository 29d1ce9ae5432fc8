//! # 县级绘制分类器
//!
//! 根据两个政党的变化量决定绘制中性标记还是箭头：
//! - 两者均为负：中性标记
//! - 否则变化量较大的政党获胜（相等时政党 A 获胜）
//!   - 政党 A：蓝色，西北方向
//!   - 政党 B：红色，东北方向
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `map/plot.rs` 使用
//! - 使用 `models/directive.rs`

use super::Palette;
use crate::models::{Bearing, RenderDirective, Winner};

/// 分类单个县
pub fn classify(shift_a: f64, shift_b: f64, palette: &Palette) -> RenderDirective {
    if shift_a < 0.0 && shift_b < 0.0 {
        return RenderDirective::NeutralMarker;
    }

    if shift_a >= shift_b {
        RenderDirective::Arrow {
            winner: Winner::PartyA,
            color: palette.party_a,
            bearing: Bearing::NorthWest,
            magnitude: shift_a,
        }
    } else {
        RenderDirective::Arrow {
            winner: Winner::PartyB,
            color: palette.party_b,
            bearing: Bearing::NorthEast,
            magnitude: shift_b,
        }
    }
}
