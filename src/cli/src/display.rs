//! 中奖名单终端显示

use std::fmt::Write as _;

use lucky_draw_core::{mask_email, DrawConfig, DrawResult};

/// 格式化时间戳
pub fn format_timestamp(timestamp: u64) -> String {
    let datetime = chrono::DateTime::from_timestamp(timestamp as i64, 0).unwrap_or_default();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 渲染中奖名单，默认隐藏邮箱
pub fn render_winners(config: &DrawConfig, result: &DrawResult, show_emails: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", config.event_name, config.prize_name);
    let _ = writeln!(out, "抽奖时间: {} UTC", format_timestamp(result.drawn_at));
    let _ = writeln!(
        out,
        "共 {} 位参与者，抽出 {} 位中奖者",
        result.stats.total_participants, result.stats.winner_count
    );

    let width = result.winners.len().to_string().len();
    for winner in &result.winners {
        let email = if show_emails {
            winner.email().to_string()
        } else {
            mask_email(winner.email())
        };
        let _ = writeln!(out, "{:>width$}. {}  {}", winner.prize_order, winner.name(), email, width = width);
    }

    if let Some(seed) = &result.seed {
        let _ = writeln!(out, "种子: {}", seed);
    }
    let _ = write!(out, "证明: {}", result.proof);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucky_draw_core::{DrawStats, Participant, Winner};

    fn sample() -> (DrawConfig, DrawResult) {
        let config = DrawConfig::new("尾牙", "头奖", 1);
        let result = DrawResult {
            winners: vec![Winner {
                participant: Participant::new("id-1", "test@example.com", "Mary Jane"),
                prize_order: 1,
            }],
            seed: Some("s1".to_string()),
            proof: "abc".to_string(),
            drawn_at: 0,
            stats: DrawStats { total_participants: 3, winner_count: 1, selection_time_ms: 0 },
        };
        (config, result)
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_render_masks_by_default() {
        let (config, result) = sample();
        let text = render_winners(&config, &result, false);
        assert!(text.contains("1. Mary Jane  t***@e***.com"));
        assert!(!text.contains("test@example.com"));
        assert!(text.contains("种子: s1"));
        assert!(text.ends_with("证明: abc"));
    }

    #[test]
    fn test_render_full_emails() {
        let (config, result) = sample();
        let text = render_winners(&config, &result, true);
        assert!(text.contains("1. Mary Jane  test@example.com"));
    }
}
