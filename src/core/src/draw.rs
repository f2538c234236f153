//! 抽奖流程
//!
//! 校验配置 -> 抽选 -> 分配顺位 -> 生成证明。
//! 指定种子时随机源由种子的 SHA-256 派生，同一份名单可重放得到相同结果。

use std::collections::HashSet;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::errors::DrawError;
use crate::selection::{assign_prize_order, Selector, ShuffleSelector};
use crate::types::{DrawConfig, DrawResult, DrawStats, Participant};

impl DrawConfig {
    /// 抽奖前置校验，顺序与表单提示一致
    pub fn validate(&self, participant_count: usize) -> Result<(), DrawError> {
        if self.event_name.trim().is_empty() {
            return Err(DrawError::MissingEventName);
        }
        if self.prize_name.trim().is_empty() {
            return Err(DrawError::MissingPrizeName);
        }
        if participant_count == 0 {
            return Err(DrawError::NoParticipants);
        }
        if self.winner_count == 0 {
            return Err(DrawError::InvalidWinnerCount);
        }
        if self.winner_count > participant_count {
            return Err(DrawError::TooManyWinners {
                requested: self.winner_count,
                available: participant_count,
            });
        }
        Ok(())
    }
}

/// 由种子派生随机数生成器
pub fn create_rng(seed: &str) -> StdRng {
    let hash = Sha256::digest(seed.as_bytes());
    let seed_array: [u8; 32] = hash.into();
    StdRng::from_seed(seed_array)
}

/// 检查名单中的ID是否重复，返回第一个重复的ID
pub fn ensure_unique_ids(participants: &[Participant]) -> Result<(), DrawError> {
    let mut seen = HashSet::new();
    for participant in participants {
        if !seen.insert(participant.id.as_str()) {
            return Err(DrawError::DuplicateParticipantId { id: participant.id.clone() });
        }
    }
    Ok(())
}

/// 生成抽奖证明：SHA-256(len(seed) || seed || len(id_1) || id_1 || ...)
///
/// 每个字段前加8字节小端长度，字段边界不同的输入不会得到相同证明。
pub fn generate_proof(seed: &str, participants: &[Participant]) -> String {
    let mut hasher = Sha256::new();
    update_field(&mut hasher, seed);
    for participant in participants {
        update_field(&mut hasher, &participant.id);
    }
    format!("{:x}", hasher.finalize())
}

fn update_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

/// 抽奖执行器
pub struct Draw<S: Selector = ShuffleSelector> {
    selector: S,
    seed: Option<String>,
}

impl Draw<ShuffleSelector> {
    pub fn new() -> Self {
        Self::with_selector(ShuffleSelector)
    }
}

impl Default for Draw<ShuffleSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Selector> Draw<S> {
    pub fn with_selector(selector: S) -> Self {
        Self { selector, seed: None }
    }

    /// 设置随机种子，空白种子视为未设置
    pub fn seed(mut self, seed: Option<&str>) -> Self {
        self.seed = seed.filter(|s| !s.trim().is_empty()).map(str::to_string);
        self
    }

    /// 执行一轮抽奖
    pub fn run(&self, config: &DrawConfig, participants: &[Participant]) -> Result<DrawResult, DrawError> {
        config.validate(participants.len())?;
        ensure_unique_ids(participants)?;

        let start_time = Instant::now();
        let selected = match &self.seed {
            Some(seed) => self.selector.select(participants, config.winner_count, &mut create_rng(seed)),
            None => self.selector.select(participants, config.winner_count, &mut rand::thread_rng()),
        };
        let winners = assign_prize_order(selected);
        let selection_time = start_time.elapsed();

        let proof = generate_proof(self.seed.as_deref().unwrap_or(""), participants);

        info!(
            "抽奖完成: 活动={}, 奖项={}, 中奖 {}/{} 人",
            config.event_name,
            config.prize_name,
            winners.len(),
            participants.len()
        );
        debug!("抽奖证明: {}", proof);

        Ok(DrawResult {
            stats: DrawStats {
                total_participants: participants.len(),
                winner_count: winners.len(),
                selection_time_ms: selection_time.as_millis() as u64,
            },
            winners,
            seed: self.seed.clone(),
            proof,
            drawn_at: chrono::Utc::now().timestamp().max(0) as u64,
        })
    }

    /// 验证抽奖结果
    ///
    /// 有种子的结果会重放一次，中奖者与顺序必须完全一致。
    pub fn verify(&self, result: &DrawResult, participants: &[Participant]) -> bool {
        let seed = result.seed.as_deref().unwrap_or("");
        if result.proof != generate_proof(seed, participants) {
            return false;
        }

        if result.winners.len() != result.stats.winner_count {
            return false;
        }

        let input_ids: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();
        let mut winner_ids = HashSet::new();
        for (index, winner) in result.winners.iter().enumerate() {
            if winner.prize_order as usize != index + 1 {
                return false;
            }
            if !input_ids.contains(winner.id()) || !winner_ids.insert(winner.id()) {
                return false;
            }
        }

        if let Some(seed) = &result.seed {
            let replay = self.selector.select(participants, result.winners.len(), &mut create_rng(seed));
            let replay_ids = replay.iter().map(|p| p.id.as_str());
            if !replay_ids.eq(result.winners.iter().map(|w| w.id())) {
                return false;
            }
        }

        true
    }
}
