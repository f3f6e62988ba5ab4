// src/logic/rules/common.rs
//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};
use crate::error::ContractViolation;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。Joker には色がないので契約違反！
    pub fn from_suit(suit: Suit) -> Result<Self, ContractViolation> {
        match suit {
            Suit::Heart | Suit::Diamond => Ok(CardColor::Red),
            Suit::Club | Suit::Spade => Ok(CardColor::Black),
            Suit::Joker => Err(ContractViolation::JokerHasNoColor),
        }
    }

    pub fn of(card: Card) -> Result<Self, ContractViolation> {
        Self::from_suit(card.suit)
    }
}

/// カードが赤 (Diamond か Heart) なら `true`。
pub fn red_suit(card: Card) -> Result<bool, ContractViolation> {
    Ok(CardColor::of(card)? == CardColor::Red)
}

/// 2枚の色が違う (赤と黒) なら `true`。
pub fn opposing_color(first: Card, second: Card) -> Result<bool, ContractViolation> {
    Ok(red_suit(first)? != red_suit(second)?)
}

/// `card` の序数から `target` の序数を引いた差。どっちかが Joker なら契約違反。
pub(crate) fn rank_difference(card: Card, target: Card) -> Result<i8, ContractViolation> {
    let card_ordinal = card.rank.ordinal().ok_or(ContractViolation::JokerHasNoRank)?;
    let target_ordinal = target.rank.ordinal().ok_or(ContractViolation::JokerHasNoRank)?;
    Ok(card_ordinal - target_ordinal)
}
