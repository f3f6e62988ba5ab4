// src/logic/rules/move_validation.rs
//! カードの並びのチェックを、移動先デッキの種類に応じて振り分けるよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::deck::{Deck, DeckType};
use crate::error::{ContractViolation, MoveError};
use crate::logic::rules::{foundation, tableau};

/// 移動する (最初の) カードのランクとスートで、移動先に置けるかチェックする。
///
/// 文法チェックとデッキ単位のチェックは通ってる前提。
/// - 組札: 空なら Ace だけ、空じゃなければ `check_stack_move`
/// - 場札: 空なら King だけ、空じゃなければ `check_column_move`
/// - それ以外: 呼び出し側のバグなので契約違反
pub fn check_card_level(target_deck: &Deck, card_to_add: Card) -> Result<(), MoveError> {
    debug!(
        "[Card Check] {:?} onto {:?} (size {})",
        card_to_add,
        target_deck.deck_type(),
        target_deck.len()
    );

    match target_deck.deck_type() {
        DeckType::Foundation => match target_deck.top() {
            None if card_to_add.rank != Rank::Ace => Err(MoveError::AceMustStartStack),
            None => Ok(()),
            Some(target_card) => foundation::check_stack_move(target_card, card_to_add),
        },
        DeckType::Tableau => match target_deck.top() {
            None if card_to_add.rank != Rank::King => Err(MoveError::KingMustStartColumn),
            None => Ok(()),
            Some(target_card) => tableau::check_column_move(target_card, card_to_add),
        },
        other => Err(ContractViolation::UnsupportedDestination(other).into()),
    }
}
