//! 中奖者选择算法模块
//!
//! 对参与者做均匀随机排列后取前K个，不放回抽样

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::types::{Participant, Winner};

/// 选择器接口
pub trait Selector: Send + Sync {
    /// 从参与者中抽出 `min(count, participants.len())` 个不重复的中奖者，
    /// 返回顺序即中奖顺位
    fn select(&self, participants: &[Participant], count: usize, rng: &mut dyn RngCore) -> Vec<Participant>;
}

/// 洗牌选择器
///
/// Fisher-Yates 洗牌：从最后一个位置往前，每个位置与其之前（含自身）的
/// 均匀随机位置交换，保证每种排列概率相同。
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffleSelector;

impl Selector for ShuffleSelector {
    fn select(&self, participants: &[Participant], count: usize, rng: &mut dyn RngCore) -> Vec<Participant> {
        let mut pool = participants.to_vec();
        pool.shuffle(rng);
        pool.truncate(count.min(participants.len()));
        pool
    }
}

/// 使用线程随机源抽选中奖者
pub fn select_winners(participants: &[Participant], count: usize) -> Vec<Participant> {
    ShuffleSelector.select(participants, count, &mut rand::thread_rng())
}

/// 使用指定随机源抽选中奖者
pub fn select_winners_with_rng<R: RngCore>(participants: &[Participant], count: usize, rng: &mut R) -> Vec<Participant> {
    ShuffleSelector.select(participants, count, rng)
}

/// 按抽出顺序分配中奖顺位（从1开始）
pub fn assign_prize_order(selected: Vec<Participant>) -> Vec<Winner> {
    selected
        .into_iter()
        .zip(1u32..)
        .map(|(participant, prize_order)| Winner { participant, prize_order })
        .collect()
}
