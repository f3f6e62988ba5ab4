// src/logic/executor.rs
//! カード移動を実際に実行するよ！🖱️💨
//!
//! 入力 → 文法チェック → 場所をデッキに解決 → デッキ単位のチェック → カードの並びのチェック。
//! 全部通ったときだけデッキを変更する。どこかで落ちたらテーブルはそのまま。

use log::{error, info, warn};
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::location::LocationTag;
use crate::error::MoveError;
use crate::logic::rules::{check_card_level, check_deck_level, check_player_input, tokenize, MoveCommand};
use crate::logic::table::GameTable;

/// 実行できた移動の結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub source: LocationTag,
    pub destination: LocationTag,
    /// 動かした (最初の) カード。
    pub card: Card,
    /// 動かした枚数。
    pub moved: usize,
    /// 移動元の裏向きカードが1枚めくれたら `true`。
    pub revealed: bool,
}

/// 山札をめくった結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// 山札から1枚めくって捨て札に置いた。
    Dealt(Card),
    /// 山札が空だったので、捨て札を裏返して山札に戻した。
    Reset { cards: usize },
}

impl GameTable {
    /// 生の入力行 (`"m a2 sb"` とか) を実行する。
    pub fn execute_move(&mut self, input: &str) -> Result<MoveReport, MoveError> {
        let tokens = tokenize(input);
        let command = check_player_input(&tokens)?;
        self.play(command)
    }

    /// 文法チェック済みのコマンドを実行する。
    pub fn play(&mut self, command: MoveCommand) -> Result<MoveReport, MoveError> {
        let source_location = command.source.location();
        let destination_location = command.destination.location();
        let source_index = self.source_index(source_location);

        let card = self
            .validate(command, source_index)
            .inspect_err(|err| {
                if err.is_defect() {
                    error!("[Executor] {} -> {}: {}", command.source, command.destination, err.message());
                }
            })?;

        let cards = self.deck_mut(source_location).take_from(source_index);
        let moved = cards.len();
        self.deck_mut(destination_location).append(cards);
        let revealed = self.deck_mut(source_location).reveal_top();

        info!(
            "[Executor] Moved {} card(s) from {} to {} starting with {:?}{}",
            moved,
            command.source,
            command.destination,
            card,
            if revealed { ", revealed a card" } else { "" }
        );
        Ok(MoveReport {
            source: command.source,
            destination: command.destination,
            card,
            moved,
            revealed,
        })
    }

    /// デッキ単位とカードの並びのチェック。読むだけ。通ったら動かす最初のカードを返す。
    fn validate(&self, command: MoveCommand, source_index: usize) -> Result<Card, MoveError> {
        let source = self.deck(command.source.location());
        let destination = self.deck(command.destination.location());

        check_deck_level(source, source_index, destination)?;
        let card = source
            .get(source_index)
            .ok_or(MoveError::MissingCard { location: command.source, index: source_index })?;
        check_card_level(destination, card)?;
        Ok(card)
    }

    /// 山札を1枚めくる。山札が空なら捨て札を全部山札に戻す。
    pub fn draw_from_stock(&mut self) -> Result<DrawOutcome, MoveError> {
        if let Some(card) = self.stock.pop() {
            self.waste.push(card);
            info!("[Executor] Dealt {:?} from the stock", card);
            return Ok(DrawOutcome::Dealt(card));
        }
        if !self.can_draw() {
            warn!("[Executor] Nothing to draw");
            return Err(MoveError::NothingToDraw);
        }

        let mut cards = 0;
        while let Some(card) = self.waste.pop() {
            self.stock.push(card);
            cards += 1;
        }
        info!("[Executor] Turned {} waste card(s) back into the stock", cards);
        Ok(DrawOutcome::Reset { cards })
    }
}
