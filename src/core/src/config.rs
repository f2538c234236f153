//! 运行配置
//!
//! 默认值 -> 环境变量 -> 命令行参数，后者覆盖前者

use serde::{Deserialize, Serialize};

/// 生成ID冲突时的默认重试上限
pub const DEFAULT_ID_RETRY_CAP: u32 = 8;

/// 抽奖运行配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    /// 生成ID与本批次已有ID冲突时的重试次数
    pub id_retry_cap: u32,
    /// 随机种子，设置后抽奖结果可复现
    pub seed: Option<String>,
    /// 是否显示完整邮箱
    pub show_emails: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            id_retry_cap: DEFAULT_ID_RETRY_CAP,
            seed: None,
            show_emails: false,
        }
    }
}

impl DrawSettings {
    /// 从环境变量读取配置，缺失或无法解析时使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            id_retry_cap: std::env::var("LUCKY_DRAW_ID_RETRY_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.id_retry_cap),
            seed: std::env::var("LUCKY_DRAW_SEED")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            show_emails: std::env::var("LUCKY_DRAW_SHOW_EMAILS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.show_emails),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// 配置构建器
#[derive(Debug, Default)]
pub struct DrawSettingsBuilder {
    settings: DrawSettings,
}

impl DrawSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有配置为基础继续覆盖
    pub fn from_settings(settings: DrawSettings) -> Self {
        Self { settings }
    }

    pub fn id_retry_cap(mut self, cap: u32) -> Self {
        self.settings.id_retry_cap = cap;
        self
    }

    pub fn seed(mut self, seed: &str) -> Self {
        self.settings.seed = Some(seed.to_string());
        self
    }

    pub fn show_emails(mut self, show: bool) -> Self {
        self.settings.show_emails = show;
        self
    }

    pub fn build(self) -> DrawSettings {
        self.settings
    }
}
