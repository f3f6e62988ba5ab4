// src/logic/rules/structure.rs
//! デッキ単位で移動できるかチェックするよ。カードのランクやスートはここでは見ない！

use log::debug;

use crate::components::deck::{Deck, DeckType};
use crate::error::MoveError;

/// 移動元デッキ・移動元の (最初の) カードの位置・移動先デッキから、移動できるか判定する。
///
/// 上から順番にチェックして、最初に引っかかったものを返すよ:
/// 1. 移動元と移動先が同じデッキ (参照が同じ)
/// 2. 移動元が空
/// 3. 移動先が山札
/// 4. 2枚以上動かす + 移動元に裏向きカードがない + 移動先が組札
/// 5. 動かす位置が裏向きの範囲に入ってる
///
/// デッキは読むだけ。何も変更しないよ。
pub fn check_deck_level(source: &Deck, source_index: usize, destination: &Deck) -> Result<(), MoveError> {
    debug!(
        "[Deck Check] {:?}[{}] (size {}, invisible {}) -> {:?} (size {})",
        source.deck_type(),
        source_index,
        source.len(),
        source.invisible_cards(),
        destination.deck_type(),
        destination.len()
    );

    if std::ptr::eq(source, destination) {
        return Err(MoveError::SameDeck);
    }
    if source.is_empty() {
        return Err(MoveError::EmptySource);
    }
    if destination.deck_type() == DeckType::Stock {
        return Err(MoveError::StockDestination);
    }
    let moved_cards = source.len().saturating_sub(source_index);
    if moved_cards > 1 && source.invisible_cards() == 0 && destination.deck_type() == DeckType::Foundation {
        return Err(MoveError::MultipleCardsToStack);
    }
    if source.invisible_cards() > source_index {
        return Err(MoveError::InvisibleCard);
    }

    debug!("[Deck Check]  - OK ({} card(s))", moved_cards);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    fn column(cards: &[(Suit, Rank)], invisible: usize) -> Deck {
        let cards = cards.iter().map(|&(suit, rank)| Card::new(suit, rank)).collect();
        Deck::with_cards(DeckType::Tableau, cards, invisible)
    }

    fn run_king_to_jack() -> Deck {
        column(&[(Suit::Spade, Rank::King), (Suit::Heart, Rank::Queen), (Suit::Club, Rank::Jack)], 0)
    }

    #[test]
    fn same_deck_is_rejected_even_when_empty() {
        let deck = Deck::new(DeckType::Tableau);
        assert_eq!(check_deck_level(&deck, 0, &deck), Err(MoveError::SameDeck));
        let deck = run_king_to_jack();
        assert_eq!(check_deck_level(&deck, 2, &deck), Err(MoveError::SameDeck));
    }

    #[test]
    fn identical_contents_are_still_different_decks() {
        let first = run_king_to_jack();
        let second = first.clone();
        assert_eq!(first, second);
        assert_eq!(check_deck_level(&first, 2, &second), Ok(()));
    }

    #[test]
    fn empty_source_is_rejected() {
        let source = Deck::new(DeckType::Waste);
        let destination = Deck::new(DeckType::Tableau);
        assert_eq!(check_deck_level(&source, 0, &destination), Err(MoveError::EmptySource));
    }

    #[test]
    fn stock_is_never_a_destination() {
        let source = run_king_to_jack();
        let stock = Deck::new(DeckType::Stock);
        assert_eq!(check_deck_level(&source, 2, &stock), Err(MoveError::StockDestination));
    }

    #[test]
    fn several_visible_cards_cannot_go_to_a_stack() {
        let source = run_king_to_jack();
        let stack = Deck::new(DeckType::Foundation);
        assert_eq!(check_deck_level(&source, 1, &stack), Err(MoveError::MultipleCardsToStack));
        assert_eq!(check_deck_level(&source, 2, &stack), Ok(()), "1枚ならOKなはず");
        let other_column = Deck::new(DeckType::Tableau);
        assert_eq!(check_deck_level(&source, 1, &other_column), Ok(()));
    }

    #[test]
    fn invisible_card_cannot_be_moved() {
        let source = column(
            &[(Suit::Heart, Rank::Two), (Suit::Club, Rank::Nine), (Suit::Spade, Rank::Four)],
            2,
        );
        let destination = Deck::new(DeckType::Tableau);
        assert_eq!(check_deck_level(&source, 0, &destination), Err(MoveError::InvisibleCard));
        assert_eq!(check_deck_level(&source, 1, &destination), Err(MoveError::InvisibleCard));
        assert_eq!(check_deck_level(&source, 2, &destination), Ok(()));
    }

    #[test]
    fn index_past_the_end_does_not_underflow() {
        let source = run_king_to_jack();
        let stack = Deck::new(DeckType::Foundation);
        assert_eq!(check_deck_level(&source, 10, &stack), Ok(()));
    }
}
