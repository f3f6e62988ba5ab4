// src/logic/rules/foundation.rs
//! 組札 (Foundation / Stack) へのカード移動ルールを定義するよ。

use log::{debug, warn};

use crate::components::card::Card;
use crate::config::rules::STACK_WRAP_DIFFERENCE;
use crate::error::MoveError;
use super::common::rank_difference;

/// `target_card` (組札の一番上) の上に `card_to_add` を置けるかチェックする。
///
/// 同じスートで、ランクがちょうど1つ上ならOK。
pub fn check_stack_move(target_card: Card, card_to_add: Card) -> Result<(), MoveError> {
    debug!("[Stack Rule] Checking {:?} onto {:?}", card_to_add, target_card);

    if target_card.suit != card_to_add.suit {
        debug!("[Stack Rule]  - Suit mismatch");
        return Err(MoveError::StackSuitMismatch);
    }

    let difference = rank_difference(card_to_add, target_card)?;
    if difference == STACK_WRAP_DIFFERENCE {
        // King の上に Ace。昔からの互換で通すだけで、一周するルールとして広げちゃダメ。
        warn!(
            "[Stack Rule]  - {:?} onto {:?} passes through as a King-to-Ace wrap",
            card_to_add, target_card
        );
        return Ok(());
    }
    if difference != 1 {
        debug!("[Stack Rule]  - Rank gap {} is not +1", difference);
        return Err(MoveError::StackRankGap);
    }

    debug!("[Stack Rule]  - OK");
    Ok(())
}
