// src/logic/rules/tableau.rs
//! 場札 (Tableau / Column) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;
use crate::error::MoveError;
use super::common::{opposing_color, rank_difference};

/// `target_card` (列の一番下に見えてるカード) の上に `card_to_add` を重ねられるかチェックする。
///
/// 赤と黒が交互で、ランクがちょうど1つ下ならOK。
pub fn check_column_move(target_card: Card, card_to_add: Card) -> Result<(), MoveError> {
    debug!("[Column Rule] Checking {:?} onto {:?}", card_to_add, target_card);

    if !opposing_color(target_card, card_to_add)? {
        debug!("[Column Rule]  - Same color");
        return Err(MoveError::ColumnSameColor);
    }

    let difference = rank_difference(target_card, card_to_add)?;
    if difference != 1 {
        debug!("[Column Rule]  - Rank gap {} is not -1", difference);
        return Err(MoveError::ColumnRankGap);
    }

    debug!("[Column Rule]  - OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::error::ContractViolation;

    #[test]
    fn descending_alternating_color_is_accepted() {
        let king_spades = Card::new(Suit::Spade, Rank::King);
        assert_eq!(check_column_move(king_spades, Card::new(Suit::Heart, Rank::Queen)), Ok(()));
        assert_eq!(check_column_move(king_spades, Card::new(Suit::Diamond, Rank::Queen)), Ok(()));
        assert_eq!(
            check_column_move(Card::new(Suit::Heart, Rank::Three), Card::new(Suit::Club, Rank::Two)),
            Ok(())
        );
    }

    #[test]
    fn same_color_pairs_are_rejected() {
        let cases = [
            (Suit::Spade, Suit::Spade),
            (Suit::Spade, Suit::Club),
            (Suit::Club, Suit::Spade),
            (Suit::Heart, Suit::Diamond),
            (Suit::Diamond, Suit::Heart),
        ];
        for (target_suit, card_suit) in cases {
            assert_eq!(
                check_column_move(Card::new(target_suit, Rank::King), Card::new(card_suit, Rank::Queen)),
                Err(MoveError::ColumnSameColor),
                "{:?} の上に {:?} は置けないはず",
                target_suit,
                card_suit
            );
        }
    }

    #[test]
    fn rank_gaps_are_rejected() {
        let king_spades = Card::new(Suit::Spade, Rank::King);
        assert_eq!(
            check_column_move(king_spades, Card::new(Suit::Heart, Rank::Jack)),
            Err(MoveError::ColumnRankGap)
        );
        assert_eq!(
            check_column_move(Card::new(Suit::Spade, Rank::Queen), Card::new(Suit::Heart, Rank::King)),
            Err(MoveError::ColumnRankGap),
            "上がりの順番はダメなはず"
        );
    }

    #[test]
    fn joker_is_a_contract_violation() {
        assert_eq!(
            check_column_move(Card::new(Suit::Spade, Rank::King), Card::joker()),
            Err(MoveError::Contract(ContractViolation::JokerHasNoColor))
        );
    }
}
