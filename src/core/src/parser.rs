//! 参与者名单解析模块
//!
//! 每行一个参与者，以空白分隔字段，支持三种格式：
//!
//! ```text
//! NAME EMAIL
//! ID EMAIL NAME...      (ID 为标准UUID文本)
//! NAME... EMAIL         (姓名可含空格，邮箱在最后)
//! ```
//!
//! 格式按 [`FORMAT_RULES`] 的顺序逐条匹配，第一条命中的规则决定该行格式。
//! 无法识别的行直接跳过，解析本身永不失败。

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::RngCore;
use tracing::{debug, warn};

use crate::config::DEFAULT_ID_RETRY_CAP;
use crate::types::{ParseReport, Participant, SkipReason, SkippedLine};
use crate::utils::{EmailUtils, IdUtils};

/// 行格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `NAME EMAIL`
    NameEmail,
    /// `ID EMAIL NAME...`
    IdEmailName,
    /// `NAME... EMAIL`
    NameTrailingEmail,
}

/// 格式判断规则
pub struct FormatRule {
    pub name: &'static str,
    pub format: LineFormat,
    matches: fn(&[&str]) -> bool,
}

impl FormatRule {
    pub fn matches(&self, parts: &[&str]) -> bool {
        (self.matches)(parts)
    }
}

/// 按顺序匹配的格式规则表
pub const FORMAT_RULES: &[FormatRule] = &[
    FormatRule {
        name: "two_tokens_name_email",
        format: LineFormat::NameEmail,
        matches: two_tokens_with_email,
    },
    FormatRule {
        name: "uuid_email_name",
        format: LineFormat::IdEmailName,
        matches: uuid_then_email,
    },
    FormatRule {
        name: "name_then_trailing_email",
        format: LineFormat::NameTrailingEmail,
        matches: email_second_without_uuid,
    },
    FormatRule {
        name: "multi_word_name_trailing_email",
        format: LineFormat::NameTrailingEmail,
        matches: email_last_only,
    },
    FormatRule {
        name: "legacy_id_email_name",
        format: LineFormat::IdEmailName,
        matches: at_least_three_tokens,
    },
];

fn two_tokens_with_email(parts: &[&str]) -> bool {
    parts.len() == 2 && EmailUtils::looks_like_email(parts[1])
}

fn uuid_then_email(parts: &[&str]) -> bool {
    parts.len() >= 3 && EmailUtils::looks_like_email(parts[1]) && IdUtils::is_uuid(parts[0])
}

fn email_second_without_uuid(parts: &[&str]) -> bool {
    parts.len() >= 3 && EmailUtils::looks_like_email(parts[1])
}

// `FIRST LAST EMAIL`：第二个字段不是邮箱，但最后一个是
fn email_last_only(parts: &[&str]) -> bool {
    parts.len() >= 3 && parts.last().is_some_and(|p| EmailUtils::looks_like_email(p))
}

// 旧格式兼容：即使第二个字段没有 `@` 也按 ID EMAIL NAME 处理
fn at_least_three_tokens(parts: &[&str]) -> bool {
    parts.len() >= 3
}

/// 找出一行字段命中的第一条规则
pub fn matching_rule(parts: &[&str]) -> Result<&'static FormatRule, SkipReason> {
    if parts.len() < 2 {
        return Err(SkipReason::TooFewTokens);
    }
    FORMAT_RULES
        .iter()
        .find(|rule| rule.matches(parts))
        .ok_or(SkipReason::MissingEmail)
}

/// 判断一行字段的格式
pub fn classify(parts: &[&str]) -> Result<LineFormat, SkipReason> {
    matching_rule(parts).map(|rule| rule.format)
}

/// 名单解析器
pub struct Parser<R: RngCore = ThreadRng> {
    rng: R,
    id_retry_cap: u32,
}

impl Parser<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Parser<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Parser<R> {
    /// 使用指定随机源生成ID，便于测试复现
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            id_retry_cap: DEFAULT_ID_RETRY_CAP,
        }
    }

    pub fn id_retry_cap(mut self, cap: u32) -> Self {
        self.id_retry_cap = cap;
        self
    }

    /// 解析名单文本，跳过无法识别的行
    pub fn parse(&mut self, text: &str) -> Vec<Participant> {
        self.parse_with_report(text).participants
    }

    /// 解析名单文本，同时返回被跳过的行
    pub fn parse_with_report(&mut self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match matching_rule(&parts) {
                Ok(rule) => {
                    debug!("第 {} 行命中规则 {}", index + 1, rule.name);
                    let participant = self.build(rule.format, &parts, &seen_ids);
                    seen_ids.insert(participant.id.clone());
                    report.participants.push(participant);
                }
                Err(reason) => report.skipped.push(SkippedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                    reason,
                }),
            }
        }

        debug!(
            "解析参与者名单: {} 条记录, 跳过 {} 行",
            report.participants.len(),
            report.skipped.len()
        );
        report
    }

    fn build(&mut self, format: LineFormat, parts: &[&str], seen_ids: &HashSet<String>) -> Participant {
        match format {
            LineFormat::NameEmail => Participant {
                id: self.fresh_id(seen_ids),
                email: parts[1].to_string(),
                name: parts[0].to_string(),
            },
            LineFormat::IdEmailName => Participant {
                id: parts[0].to_string(),
                email: parts[1].to_string(),
                name: parts[2..].join(" "),
            },
            LineFormat::NameTrailingEmail => {
                let last = parts.len() - 1;
                Participant {
                    id: self.fresh_id(seen_ids),
                    email: parts[last].to_string(),
                    name: parts[..last].join(" "),
                }
            }
        }
    }

    /// 生成本批次内不重复的ID，超过重试上限则保留最后一次结果
    fn fresh_id(&mut self, seen_ids: &HashSet<String>) -> String {
        let mut candidate = IdUtils::generate_uuid(&mut self.rng);
        for _ in 0..self.id_retry_cap {
            if !seen_ids.contains(&candidate) {
                return candidate;
            }
            candidate = IdUtils::generate_uuid(&mut self.rng);
        }
        if seen_ids.contains(&candidate) {
            warn!("生成ID重试 {} 次后仍然冲突: {}", self.id_retry_cap, candidate);
        }
        candidate
    }
}

/// 使用线程随机源解析名单
pub fn parse_participants(text: &str) -> Vec<Participant> {
    Parser::new().parse(text)
}

/// 使用线程随机源解析名单并返回跳过明细
pub fn parse_with_report(text: &str) -> ParseReport {
    Parser::new().parse_with_report(text)
}
