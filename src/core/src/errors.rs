//! 抽奖前置校验错误

/// 抽奖错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("请输入活动名称")]
    MissingEventName,
    #[error("请输入奖项名称")]
    MissingPrizeName,
    #[error("请输入参与者名单")]
    NoParticipants,
    #[error("中奖数量必须大于0")]
    InvalidWinnerCount,
    #[error("中奖数量不能超过参与者人数 ({available} 人)")]
    TooManyWinners { requested: usize, available: usize },
    #[error("参与者ID重复: {id}")]
    DuplicateParticipantId { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DrawError::MissingEventName.to_string(), "请输入活动名称");
        let err = DrawError::TooManyWinners { requested: 5, available: 3 };
        assert_eq!(err.to_string(), "中奖数量不能超过参与者人数 (3 人)");
    }
}
