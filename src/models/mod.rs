//! # 数据模型模块
//!
//! 定义县坐标、选举记录、县级变化结果和绘制指令。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `shift/`, `map/` 和 `commands/` 使用
//! - 子模块: county, election, directive

pub mod county;
pub mod directive;
pub mod election;

pub use county::{CountyFips, CountyPosition, CountyShift};
pub use directive::{Bearing, MapColor, RenderDirective, Winner};
pub use election::ElectionRecord;
