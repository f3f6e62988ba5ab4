// src/error.rs
//! カード移動が通らなかった理由をまとめるよ！🙅‍♀️
//!
//! ルール違反はプレイヤーがやり直せばいい普通の結果なので、例外じゃなくて
//! `Result` の `Err` で返す。どのチェックで落ちたかは `CheckPhase` で分かるよ。
//! `ContractViolation` だけは別で、プレイヤーのミスじゃなくて呼び出し側のバグ
//! (Joker がルール判定に来た、変なデッキに移動しようとした) を表すんだ。

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::components::deck::DeckType;
use crate::components::location::LocationTag;
use crate::config::help::{HELP_POINTER, HELP_TEXT};

/// どのチェックで落ちたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckPhase {
    /// 入力の文法チェック (トークン数、コマンド、語彙)。
    Syntax,
    /// デッキ単位のチェック (同じデッキ、空、山札、枚数、裏向き)。
    Structure,
    /// カードの並びのチェック (ランクとスートと色)。
    CardOrder,
    /// 呼び出し側のバグ。
    Contract,
}

impl fmt::Display for CheckPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckPhase::Syntax => "syntax",
            CheckPhase::Structure => "structure",
            CheckPhase::CardOrder => "card order",
            CheckPhase::Contract => "contract",
        };
        f.write_str(name)
    }
}

/// エンジンが絶対に見ちゃいけない状態 (不変条件の破れ) だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// Joker の色を聞かれた。
    JokerHasNoColor,
    /// Joker のランクの並びを聞かれた。
    JokerHasNoRank,
    /// 組札でも場札でもないデッキにカードの並びチェックが回ってきた。
    UnsupportedDestination(DeckType),
    /// テーブルの決まった場所に違う種類のデッキが渡された。
    MisplacedDeck { expected: DeckType, found: DeckType },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::JokerHasNoColor => {
                write!(f, "color classification should not be used with Jokers")
            }
            ContractViolation::JokerHasNoRank => {
                write!(f, "rank adjacency should not be used with Jokers")
            }
            ContractViolation::UnsupportedDestination(deck_type) => {
                write!(f, "target deck is neither Stack nor Column but {:?}", deck_type)
            }
            ContractViolation::MisplacedDeck { expected, found } => {
                write!(f, "expected a {:?} deck but got {:?}", expected, found)
            }
        }
    }
}

impl std::error::Error for ContractViolation {}

/// カード移動が通らなかった理由。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    // --- Syntax ---
    WrongPartCount { found: usize },
    UnknownCommand(String),
    InvalidSource(String),
    InvalidDestination(String),

    // --- Structure ---
    SameDeck,
    EmptySource,
    StockDestination,
    MultipleCardsToStack,
    InvisibleCard,
    MissingCard { location: LocationTag, index: usize },
    NothingToDraw,

    // --- CardOrder ---
    AceMustStartStack,
    KingMustStartColumn,
    StackSuitMismatch,
    StackRankGap,
    ColumnSameColor,
    ColumnRankGap,

    // --- Contract ---
    Contract(ContractViolation),
}

impl MoveError {
    pub fn phase(&self) -> CheckPhase {
        match self {
            MoveError::WrongPartCount { .. }
            | MoveError::UnknownCommand(_)
            | MoveError::InvalidSource(_)
            | MoveError::InvalidDestination(_) => CheckPhase::Syntax,
            MoveError::SameDeck
            | MoveError::EmptySource
            | MoveError::StockDestination
            | MoveError::MultipleCardsToStack
            | MoveError::InvisibleCard
            | MoveError::MissingCard { .. }
            | MoveError::NothingToDraw => CheckPhase::Structure,
            MoveError::AceMustStartStack
            | MoveError::KingMustStartColumn
            | MoveError::StackSuitMismatch
            | MoveError::StackRankGap
            | MoveError::ColumnSameColor
            | MoveError::ColumnRankGap => CheckPhase::CardOrder,
            MoveError::Contract(_) => CheckPhase::Contract,
        }
    }

    /// プレイヤーのミスじゃなくてバグなら `true`。画面に普通のメッセージとして出しちゃダメ。
    pub fn is_defect(&self) -> bool {
        self.phase() == CheckPhase::Contract
    }

    /// ヘルプ文 (プロセス全体で共通)。
    pub fn help(&self) -> &'static str {
        HELP_TEXT.as_str()
    }

    /// 画面にそのまま出せるメッセージ (ヘルプへの一文はなし)。
    pub fn message(&self) -> String {
        match self {
            MoveError::WrongPartCount { found } => format!(
                "Invalid Move syntax. A move has exactly 3 parts (M <source> <destination>), found {}.",
                found
            ),
            MoveError::UnknownCommand(token) => {
                format!("Invalid Move syntax. \"{}\" is not the move command \"M\".", token)
            }
            MoveError::InvalidSource(token) => {
                format!("Invalid Move syntax. \"{}\" is not a valid source location.", token)
            }
            MoveError::InvalidDestination(token) => {
                format!("Invalid Move syntax. \"{}\" is not a valid destination location.", token)
            }
            MoveError::SameDeck => "Move source and destination can't be the same".to_string(),
            MoveError::EmptySource => "You can't move a card from an empty deck".to_string(),
            MoveError::StockDestination => "You can't move cards to the stock".to_string(),
            MoveError::MultipleCardsToStack => {
                "You can't move more than 1 card at a time to a Stack Pile".to_string()
            }
            MoveError::InvisibleCard => "You can't move an invisible card".to_string(),
            MoveError::MissingCard { location, index } => {
                format!("There is no card at {} (row {})", location, index)
            }
            MoveError::NothingToDraw => "There are no cards left in the stock or the waste".to_string(),
            MoveError::AceMustStartStack => "An Ace has to be the first card of a Stack Pile".to_string(),
            MoveError::KingMustStartColumn => "A King has to be the first card of a Column".to_string(),
            MoveError::StackSuitMismatch => "Stack Piles can only contain same-suit cards".to_string(),
            MoveError::StackRankGap => {
                "Stack Piles hold same-suit cards of increasing Rank from Ace to King".to_string()
            }
            MoveError::ColumnSameColor => "Column cards have to alternate colors (red and black)".to_string(),
            MoveError::ColumnRankGap => {
                "Columns hold alternating-color cards of decreasing rank from King to Two".to_string()
            }
            MoveError::Contract(violation) => format!("Contract violation: {}", violation),
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defect() {
            f.write_str(&self.message())
        } else {
            write!(f, "{}\n{}", self.message(), HELP_POINTER)
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Contract(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<ContractViolation> for MoveError {
    fn from(violation: ContractViolation) -> Self {
        MoveError::Contract(violation)
    }
}
