//! 核心数据类型定义

use serde::{Deserialize, Serialize};

/// 参与者信息
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// 参与者ID（同一批次内唯一）
    pub id: String,
    /// 参与者邮箱
    pub email: String,
    /// 参与者姓名，可包含空格
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

/// 中奖者：参与者加上中奖顺位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    #[serde(flatten)]
    pub participant: Participant,
    /// 中奖顺位，从1开始连续递增
    pub prize_order: u32,
}

impl Winner {
    pub fn id(&self) -> &str {
        &self.participant.id
    }

    pub fn email(&self) -> &str {
        &self.participant.email
    }

    pub fn name(&self) -> &str {
        &self.participant.name
    }
}

/// 抽奖配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// 活动名称
    pub event_name: String,
    /// 奖项名称
    pub prize_name: String,
    /// 中奖数量
    pub winner_count: usize,
}

impl DrawConfig {
    pub fn new(event_name: impl Into<String>, prize_name: impl Into<String>, winner_count: usize) -> Self {
        Self {
            event_name: event_name.into(),
            prize_name: prize_name.into(),
            winner_count,
        }
    }
}

/// 抽奖统计信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStats {
    /// 总参与者数量
    pub total_participants: usize,
    /// 中奖者数量
    pub winner_count: usize,
    /// 抽选耗时（毫秒）
    pub selection_time_ms: u64,
}

/// 抽奖结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// 中奖者列表，按顺位排列
    pub winners: Vec<Winner>,
    /// 随机种子（未指定种子时为空）
    pub seed: Option<String>,
    /// 抽奖证明
    pub proof: String,
    /// 抽奖时间戳（秒）
    pub drawn_at: u64,
    pub stats: DrawStats,
}

/// 解析时被跳过的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// 不足两个字段
    TooFewTokens,
    /// 两个字段但第二个不像邮箱
    MissingEmail,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TooFewTokens => write!(f, "字段不足"),
            SkipReason::MissingEmail => write!(f, "缺少邮箱"),
        }
    }
}

/// 被跳过的行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 原文中的行号，从1开始
    pub line_number: usize,
    /// 去除首尾空白后的内容
    pub content: String,
    pub reason: SkipReason,
}

/// 解析报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub participants: Vec<Participant>,
    pub skipped: Vec<SkippedLine>,
}
