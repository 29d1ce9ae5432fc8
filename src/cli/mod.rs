//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。所有参数的默认值即为
//! 原始固定常量，不带任何参数运行等同于 `shiftmap render`。
//!
//! ## 命令结构
//! - `render`: 完整流程，输出地图图像
//! - `export`: 仅计算变化量并导出 CSV
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: inputs, render, export

pub mod export;
pub mod inputs;
pub mod render;

use clap::{Parser, Subcommand};

/// shiftmap - 县级选票变化地图
#[derive(Parser)]
#[command(name = "shiftmap")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Map the county-level vote-share shift between two elections",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Render the shift map image (default when no command is given)
    Render(render::RenderArgs),

    /// Compute county shifts and export them as CSV
    Export(export::ExportArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::DuplicatePolicy;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from(["shiftmap"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_render_defaults_match_constants() {
        let args = render::RenderArgs::default();
        assert_eq!(args.shift.from_year, 2016);
        assert_eq!(args.shift.to_year, 2020);
        assert_eq!(args.shift.exclude_states, vec!["ALASKA", "HAWAII"]);
        assert_eq!(args.shift.exclude_fips, vec![11001, 51515, 36000]);
        assert_eq!(args.shift.duplicates, DuplicatePolicy::First);
        assert_eq!(args.km_per_point, 25.0);
        assert_eq!(args.dpi, 300);
        assert_eq!(args.output.to_str(), Some("electionshiftmap.png"));
    }

    #[test]
    fn test_export_overrides() {
        let cli = Cli::try_parse_from([
            "shiftmap",
            "export",
            "--exclude-state",
            "TEXAS",
            "--exclude-fips",
            "1001",
            "--exclude-fips",
            "1003",
            "--duplicates",
            "reject",
            "-o",
            "out.csv",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Export(args)) => {
                assert_eq!(args.shift.exclude_states, vec!["TEXAS"]);
                assert_eq!(args.shift.exclude_fips, vec![1001, 1003]);
                assert_eq!(args.shift.duplicates, DuplicatePolicy::Reject);
                assert_eq!(args.output.to_str(), Some("out.csv"));
            }
            _ => panic!("expected export command"),
        }
    }
}
