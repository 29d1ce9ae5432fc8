//! # 统一错误处理模块
//!
//! 定义 shiftmap 的所有错误类型，使用 `thiserror` 派生。
//! 所有错误均为致命错误：由 `main.rs` 打印后以状态码 1 退出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// shiftmap 统一错误类型
#[derive(Error, Debug)]
pub enum ShiftMapError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    // ─────────────────────────────────────────────────────────────
    // 连接/计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("County {fips} has election results but no entry in the coordinate table")]
    CountyNotFound { fips: u32 },

    #[error("Duplicate election row for county {fips}, year {year}, party {party}")]
    DuplicateRecord { fips: u32, year: i32, party: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to render map: {0}")]
    Render(String),

    // ─────────────────────────────────────────────────────────────
    // CSV / GeoJSON 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("GeoJSON error: {0}")]
    GeoJsonError(#[from] geojson::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ShiftMapError>;
