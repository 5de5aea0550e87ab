//! Sandhi Core Engine
//!
//! 台语(闽南语)变调核心引擎：基于规则表的声调变换

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod response;
pub mod sandhi;
pub mod tone;

// Re-export key types
pub use config::SandhiConfig;
pub use error::{SandhiError, SandhiResult};
pub use response::UpstreamResponse;
pub use sandhi::{RuleSet, RuleSetKind, SandhiEngine};
pub use tone::{SyllableClass, ToneMarker};

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): SANDHI_LOG 控制级别
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("SANDHI_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 静默运行，不启用日志
        // 如需日志，请使用 --features debug-logs 编译
    }
}
