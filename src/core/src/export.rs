//! 中奖名单导出

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{DrawConfig, Winner};

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// 每行一个姓名
    Names,
    /// 每行一个邮箱
    Emails,
    /// 每行 `姓名<TAB>邮箱`
    NameAndEmail,
}

impl ExportFormat {
    /// 导出文件名后缀
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Names => "names",
            ExportFormat::Emails => "emails",
            ExportFormat::NameAndEmail => "winners",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "names" | "name" => Ok(ExportFormat::Names),
            "emails" | "email" => Ok(ExportFormat::Emails),
            "winners" | "tsv" | "name_and_email" => Ok(ExportFormat::NameAndEmail),
            other => Err(format!("未知的导出格式: {}", other)),
        }
    }
}

/// 按中奖顺位渲染导出内容，行间以 `\n` 连接，末尾无换行
pub fn render(winners: &[Winner], format: ExportFormat) -> String {
    let mut ordered: Vec<&Winner> = winners.iter().collect();
    ordered.sort_by_key(|w| w.prize_order);

    ordered
        .into_iter()
        .map(|w| match format {
            ExportFormat::Names => w.name().to_string(),
            ExportFormat::Emails => w.email().to_string(),
            ExportFormat::NameAndEmail => format!("{}\t{}", w.name(), w.email()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 导出文件名：`{活动}_{奖项}_{后缀}.txt`
pub fn file_name(config: &DrawConfig, format: ExportFormat) -> String {
    format!("{}_{}_{}.txt", config.event_name, config.prize_name, format.file_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Participant;

    fn winners() -> Vec<Winner> {
        vec![
            Winner { participant: Participant::new("b", "bob@x.com", "Bob Lee"), prize_order: 2 },
            Winner { participant: Participant::new("a", "amy@x.com", "Amy"), prize_order: 1 },
        ]
    }

    #[test]
    fn test_render_formats() {
        assert_eq!(render(&winners(), ExportFormat::Names), "Amy\nBob Lee");
        assert_eq!(render(&winners(), ExportFormat::Emails), "amy@x.com\nbob@x.com");
        assert_eq!(render(&winners(), ExportFormat::NameAndEmail), "Amy\tamy@x.com\nBob Lee\tbob@x.com");
        assert_eq!(render(&[], ExportFormat::Names), "");
    }

    #[test]
    fn test_file_name() {
        let config = DrawConfig::new("尾牙", "特奖", 3);
        assert_eq!(file_name(&config, ExportFormat::Names), "尾牙_特奖_names.txt");
        assert_eq!(file_name(&config, ExportFormat::Emails), "尾牙_特奖_emails.txt");
        assert_eq!(file_name(&config, ExportFormat::NameAndEmail), "尾牙_特奖_winners.txt");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("names".parse::<ExportFormat>(), Ok(ExportFormat::Names));
        assert_eq!("EMAILS".parse::<ExportFormat>(), Ok(ExportFormat::Emails));
        assert_eq!("tsv".parse::<ExportFormat>(), Ok(ExportFormat::NameAndEmail));
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}
