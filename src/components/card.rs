// src/components/card.rs

// serde を使う宣言！カード情報を JSON にして外に出す時に使うよ。
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// `Joker` はルール判定に来ちゃいけない番兵 (sentinel) だよ。
/// 色の判定とかに Joker が来たら、それは呼び出し側のバグ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
    Joker,
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 並び順は Ace(0) < Two(1) < ... < King(12)。隣り合ってるかの判定は
/// `ordinal()` の差で見るよ。`Joker` だけは順番を持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,   // A (ordinal 0)
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,  // K (ordinal 12)
    Joker,
}

/// 普通のデッキに入ってる4スート。Joker は含まないよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// Ace から King までの13ランク。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// ランクの序数 (Ace=0 ... King=12) を返すよ。Joker は順番がないので `None`！
    pub fn ordinal(self) -> Option<i8> {
        match self {
            Rank::Joker => None,
            other => Some(other as i8),
        }
    }
}

/// カードそのものだよ！🃏 一度作ったら変わらない値 (immutable) として扱う。
///
/// 表向きか裏向きかはカード自身じゃなくて、そのカードが入ってる `Deck` の
/// `invisible_cards` で管理してるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Joker カードを作るヘルパー。テストとか、不正データの再現用。
    pub fn joker() -> Self {
        Self { suit: Suit::Joker, rank: Rank::Joker }
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker || self.rank == Rank::Joker
    }
}

/// 標準的な52枚のカードを、スート順・ランク順に並べて作るよ！
/// シャッフルや配る処理はこのクレートの外の仕事。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
