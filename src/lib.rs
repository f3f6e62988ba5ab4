// src/lib.rs
//! クロンダイク (ソリティア) のカード移動ルールエンジンだよ！🃏✅
//!
//! 「どこから」「何枚目から」「どこへ」の移動が、ルール上できるかを判定して、
//! できないなら理由を返す。チェックは3段階:
//!
//! - [`check_player_input`]: 入力の文法 (`M <移動元> <移動先>`)
//! - [`check_deck_level`]: デッキ単位 (同じデッキ、空、山札、枚数、裏向き)
//! - [`check_card_level`]: カードのランクとスートと色
//!
//! [`GameTable::execute_move`] は3つを順番に呼んで、全部通ったときだけデッキを動かすよ。
//! ログは `log` クレート経由で出すので、ロガーの設定は使う側でやってね。

pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;

pub use crate::components::card::{Card, Rank, Suit};
pub use crate::components::deck::{Deck, DeckType};
pub use crate::components::location::{Location, LocationTag};
pub use crate::error::{CheckPhase, ContractViolation, MoveError};
pub use crate::logic::rules::{
    check_card_level, check_column_move, check_deck_level, check_player_input, check_stack_move,
    opposing_color, red_suit, tokenize, CardColor, MoveCommand,
};
pub use crate::logic::{DrawOutcome, GameTable, MoveReport};
pub use crate::protocol::MoveVerdict;
