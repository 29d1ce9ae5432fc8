//! # 进度提示工具
//!
//! 封装 `indicatif` spinner，用于读取大型 CSV 等耗时不确定的步骤。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 创建 spinner
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}") {
        pb.set_style(style.tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 在 spinner 显示期间执行任务，结束后清除
pub fn with_spinner<T>(message: &str, task: impl FnOnce() -> T) -> T {
    let pb = create_spinner(message);
    let result = task();
    pb.finish_and_clear();
    result
}
