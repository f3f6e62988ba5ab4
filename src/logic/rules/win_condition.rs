//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::deck::Deck;
use crate::config::rules::{CARDS_PER_SUIT, NUM_STACKS};

/// ゲームのクリア条件（4つの組札が全部 King まで積み上がってるか）を判定する。
pub fn check_win_condition(stacks: &[Deck]) -> bool {
    stacks.len() == NUM_STACKS && stacks.iter().all(|stack| stack.len() == CARDS_PER_SUIT)
}
