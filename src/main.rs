//! # shiftmap - 县级选票变化地图
//!
//! 读取县坐标与县级总统选举结果，计算两届选举间两个政党得票率的变化，
//! 并在美国州界底图上为每个县绘制方向箭头（或中性标记）。
//!
//! ## 子命令
//! - `render` - 完整流程，输出 PNG/SVG 地图（默认）
//! - `export` - 导出县级变化量 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (CSV / GeoJSON 读取)
//!   │     ├── shift/     (过滤、索引、变化量)
//!   │     ├── map/       (分类、投影、绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod map;
mod models;
mod parsers;
mod shift;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
