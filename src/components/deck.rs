// src/components/deck.rs

use log::warn;
use serde::{Serialize, Deserialize};

use crate::components::card::Card;

/// デッキ（カードの山）の種類を示す Enum だよ。
/// ルール判定はこの種類を見て、どのルールを当てはめるか決めるんだ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeckType {
    /// 山札 (Stock)。移動先には絶対になれない。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste / Talon)。
    Waste,
    /// 組札 (Foundation)。コマンド上は "stack" (SA..SD) って呼ぶよ。
    Foundation,
    /// 場札 (Tableau)。コマンド上は "column" (A..G) って呼ぶよ。
    Tableau,
}

/// 順番付きのカードの山だよ。
///
/// - `cards[0]` が一番下（一番古い）、最後の要素が一番上。
/// - `invisible_cards` は下から何枚が裏向きか。裏向きのカードは動かせないし中身も見えない。
///
/// `invisible_cards` は減ることはあっても増えることはない (めくったら戻さない)。
/// それに常に `len()` 以下になるようにしてるよ。
///
/// 「同じデッキか？」の判定は中身の比較じゃなくて参照の同一性 (`std::ptr::eq`) で見るので、
/// 中身が同じでも別のデッキは別物！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DeckRepr")]
pub struct Deck {
    deck_type: DeckType,
    cards: Vec<Card>,
    invisible_cards: usize,
}

/// JSON から読むときの生の形。`Deck` にする前に `with_cards` を通して枚数を揃えるよ。
#[derive(Deserialize)]
struct DeckRepr {
    deck_type: DeckType,
    #[serde(default)]
    cards: Vec<Card>,
    #[serde(default)]
    invisible_cards: usize,
}

impl From<DeckRepr> for Deck {
    fn from(repr: DeckRepr) -> Self {
        Deck::with_cards(repr.deck_type, repr.cards, repr.invisible_cards)
    }
}

impl Deck {
    /// 空のデッキを作るよ。
    pub fn new(deck_type: DeckType) -> Self {
        Self { deck_type, cards: Vec::new(), invisible_cards: 0 }
    }

    /// 配り終わったカードからデッキを作る。配る処理そのものは外の仕事ね。
    /// `invisible_cards` が枚数より多かったら、警告を出して枚数に切り詰めるよ。
    pub fn with_cards(deck_type: DeckType, cards: Vec<Card>, invisible_cards: usize) -> Self {
        if invisible_cards > cards.len() {
            warn!(
                "[Deck] {:?} deck has {} card(s) but {} hidden, clamping",
                deck_type,
                cards.len(),
                invisible_cards
            );
        }
        let invisible_cards = invisible_cards.min(cards.len());
        Self { deck_type, cards, invisible_cards }
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn invisible_cards(&self) -> usize {
        self.invisible_cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// 一番上のカード (なければ None)。
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 表向きのカードだけ (裏向きの部分より上)。
    pub fn visible_cards(&self) -> &[Card] {
        &self.cards[self.invisible_cards..]
    }

    /// 一番上にカードを1枚置く。置いたカードは表向き。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上にカードの列をまとめて置く (順番はそのまま)。
    pub fn append(&mut self, mut cards: Vec<Card>) {
        self.cards.append(&mut cards);
    }

    /// 一番上のカードを1枚取る。
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        self.invisible_cards = self.invisible_cards.min(self.cards.len());
        card
    }

    /// `index` から上のカードを全部取り出すよ。`index` が枚数以上なら空っぽの Vec。
    pub fn take_from(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        let taken = self.cards.split_off(index);
        self.invisible_cards = self.invisible_cards.min(self.cards.len());
        taken
    }

    /// 表向きのカードがなくなって裏向きのカードだけ残ってたら、一番上を1枚めくる。
    /// めくったら `true`。
    pub fn reveal_top(&mut self) -> bool {
        if self.invisible_cards > 0 && self.invisible_cards == self.cards.len() {
            self.invisible_cards -= 1;
            true
        } else {
            false
        }
    }
}
