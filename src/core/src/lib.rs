//! 抽奖系统 - 核心模块
//!
//! 从自由文本名单解析参与者，公平抽出指定数量的中奖者，并导出结果

pub mod config;
pub mod draw;
pub mod errors;
pub mod export;
pub mod parser;
pub mod selection;
pub mod types;
pub mod utils;

pub use config::{DrawSettings, DrawSettingsBuilder};
pub use draw::Draw;
pub use errors::DrawError;
pub use export::ExportFormat;
pub use parser::{parse_participants, parse_with_report, LineFormat, Parser};
pub use selection::{assign_prize_order, select_winners, Selector, ShuffleSelector};
pub use types::{DrawConfig, DrawResult, DrawStats, ParseReport, Participant, SkipReason, SkippedLine, Winner};

/// 核心库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 邮箱脱敏显示，见 [`utils::EmailUtils::mask`]
pub fn mask_email(email: &str) -> String {
    utils::EmailUtils::mask(email)
}
