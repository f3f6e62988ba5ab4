// src/logic/table.rs
//! ゲームの場 (テーブル) 全体のデッキを持つ構造体だよ！🃏
//!
//! 山札・捨て札・組札4つ・場札7列。配る処理は外でやって、できたデッキを渡してね。

use serde::{Serialize, Deserialize};

use crate::components::deck::{Deck, DeckType};
use crate::components::location::Location;
use crate::config::rules::{NUM_COLUMNS, NUM_STACKS};
use crate::error::ContractViolation;
use crate::logic::rules::{can_deal_from_stock, can_reset_stock_from_waste, check_win_condition};

/// フィールドは直接いじれるけど、それぞれのデッキの種類は決まってるよ:
/// `stock` は Stock、`waste` は Waste、`stacks` は Foundation、`columns` は Tableau。
/// 違う種類を入れると、移動のチェックが変なエラーを返すので注意！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTable {
    pub stock: Deck,
    pub waste: Deck,
    pub stacks: [Deck; NUM_STACKS],
    pub columns: [Deck; NUM_COLUMNS],
}

impl GameTable {
    /// 全部空っぽのテーブル。
    pub fn empty() -> Self {
        Self {
            stock: Deck::new(DeckType::Stock),
            waste: Deck::new(DeckType::Waste),
            stacks: std::array::from_fn(|_| Deck::new(DeckType::Foundation)),
            columns: std::array::from_fn(|_| Deck::new(DeckType::Tableau)),
        }
    }

    /// 配り終わった場札7列と山札からテーブルを作る。
    /// 種類が違うデッキが混ざってたら、その場で契約違反を返すよ。
    pub fn with_layout(columns: [Deck; NUM_COLUMNS], stock: Deck) -> Result<Self, ContractViolation> {
        expect_deck_type(&stock, DeckType::Stock)?;
        for column in &columns {
            expect_deck_type(column, DeckType::Tableau)?;
        }
        Ok(Self { stock, columns, ..Self::empty() })
    }

    /// 場所が指してるデッキ。
    pub fn deck(&self, location: Location) -> &Deck {
        match location {
            Location::Talon => &self.waste,
            Location::Column { column, .. } => &self.columns[column],
            Location::Stack(stack) => &self.stacks[stack],
        }
    }

    pub(crate) fn deck_mut(&mut self, location: Location) -> &mut Deck {
        match location {
            Location::Talon => &mut self.waste,
            Location::Column { column, .. } => &mut self.columns[column],
            Location::Stack(stack) => &mut self.stacks[stack],
        }
    }

    /// 移動元として見たときの、最初に動かすカードの位置。
    /// 座標 (`A2` とか) ならその行、それ以外は一番上のカード。
    pub fn source_index(&self, location: Location) -> usize {
        match location {
            Location::Column { row: Some(row), .. } => row,
            _ => self.deck(location).len().saturating_sub(1),
        }
    }

    /// 山札をめくるか、捨て札を山札に戻せるなら `true`。
    pub fn can_draw(&self) -> bool {
        can_deal_from_stock(&self.stock) || can_reset_stock_from_waste(&self.stock, &self.waste)
    }

    pub fn is_won(&self) -> bool {
        check_win_condition(&self.stacks)
    }
}

fn expect_deck_type(deck: &Deck, expected: DeckType) -> Result<(), ContractViolation> {
    if deck.deck_type() == expected {
        Ok(())
    } else {
        Err(ContractViolation::MisplacedDeck { expected, found: deck.deck_type() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{create_standard_deck, Card, Rank, Suit, ALL_SUITS};

    #[test]
    fn empty_table_has_typed_decks() {
        let table = GameTable::empty();
        assert_eq!(table.stock.deck_type(), DeckType::Stock);
        assert_eq!(table.waste.deck_type(), DeckType::Waste);
        assert!(table.stacks.iter().all(|s| s.deck_type() == DeckType::Foundation));
        assert!(table.columns.iter().all(|c| c.deck_type() == DeckType::Tableau));
        assert!(!table.can_draw());
        assert!(!table.is_won());
    }

    #[test]
    fn locations_resolve_to_decks() {
        let mut table = GameTable::empty();
        table.columns[2].push(Card::new(Suit::Spade, Rank::King));
        table.waste.push(Card::new(Suit::Heart, Rank::Five));

        let column_c = Location::Column { column: 2, row: None };
        assert!(std::ptr::eq(table.deck(column_c), &table.columns[2]));
        assert!(std::ptr::eq(table.deck(Location::Talon), &table.waste));
        assert!(std::ptr::eq(table.deck(Location::Stack(3)), &table.stacks[3]));

        assert_eq!(table.source_index(column_c), 0);
        assert_eq!(table.source_index(Location::Column { column: 2, row: Some(10) }), 10);
        assert_eq!(table.source_index(Location::Stack(0)), 0, "空なら 0 になるはず");
    }

    #[test]
    fn layout_keeps_dealt_decks() {
        let mut columns: [Deck; NUM_COLUMNS] = std::array::from_fn(|_| Deck::new(DeckType::Tableau));
        columns[6] = Deck::with_cards(DeckType::Tableau, vec![Card::new(Suit::Club, Rank::Nine)], 0);
        let stock = Deck::with_cards(DeckType::Stock, vec![Card::new(Suit::Heart, Rank::Two)], 0);

        let table = GameTable::with_layout(columns, stock).unwrap();
        assert_eq!(table.columns[6].top(), Some(Card::new(Suit::Club, Rank::Nine)));
        assert_eq!(table.stock.len(), 1);
        assert!(table.waste.is_empty());
        assert!(table.stacks.iter().all(|s| s.deck_type() == DeckType::Foundation));
    }

    #[test]
    fn layout_rejects_decks_of_the_wrong_type() {
        let mut columns: [Deck; NUM_COLUMNS] = std::array::from_fn(|_| Deck::new(DeckType::Tableau));
        columns[3] = Deck::new(DeckType::Stock);
        assert_eq!(
            GameTable::with_layout(columns, Deck::new(DeckType::Stock)),
            Err(ContractViolation::MisplacedDeck { expected: DeckType::Tableau, found: DeckType::Stock })
        );

        let columns: [Deck; NUM_COLUMNS] = std::array::from_fn(|_| Deck::new(DeckType::Tableau));
        assert_eq!(
            GameTable::with_layout(columns, Deck::new(DeckType::Waste)),
            Err(ContractViolation::MisplacedDeck { expected: DeckType::Stock, found: DeckType::Waste })
        );
        println!("with_layout の種類チェックテスト、成功！🎉");
    }

    #[test]
    fn full_stacks_win() {
        let mut table = GameTable::empty();
        let deck = create_standard_deck();
        for (stack, suit) in table.stacks.iter_mut().zip(ALL_SUITS) {
            for card in deck.iter().filter(|card| card.suit == suit) {
                stack.push(*card);
            }
        }
        assert!(table.is_won());
        table.stacks[1].pop();
        assert!(!table.is_won());
        println!("ゲームクリア判定テスト、成功！🎉");
    }
}
