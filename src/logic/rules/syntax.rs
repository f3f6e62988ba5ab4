// src/logic/rules/syntax.rs
//! プレイヤーの入力が移動コマンドとして文法的に正しいかチェックするよ！⌨️
//!
//! ここは字面だけのチェック。デッキの中身は一切見ない。

use log::debug;

use crate::components::location::LocationTag;
use crate::config::rules::{MOVE_COMMAND, MOVE_COMMAND_PARTS};
use crate::error::MoveError;

/// 文法チェックを通った移動コマンド。移動元と移動先のトークンが型付きで入ってる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub source: LocationTag,
    pub destination: LocationTag,
}

/// 空白で区切って大文字にした入力トークンをチェックする。
///
/// - ちょうど3個 (`M <移動元> <移動先>`)
/// - 1個目は `M`
/// - 2個目は移動元の語彙 (`LocationTag::SOURCES`)
/// - 3個目は移動先の語彙 (`LocationTag::DESTINATIONS`)
pub fn check_player_input<S: AsRef<str>>(tokens: &[S]) -> Result<MoveCommand, MoveError> {
    debug!("[Syntax Check] Checking {} token(s)", tokens.len());

    let [command, source, destination] = tokens else {
        debug!("[Syntax Check]  - Wrong number of parts, expected {}", MOVE_COMMAND_PARTS);
        return Err(MoveError::WrongPartCount { found: tokens.len() });
    };
    let (command, source, destination) = (command.as_ref(), source.as_ref(), destination.as_ref());

    if command != MOVE_COMMAND {
        debug!("[Syntax Check]  - \"{}\" is not the move command", command);
        return Err(MoveError::UnknownCommand(command.to_string()));
    }

    let source_tag = source
        .parse::<LocationTag>()
        .ok()
        .filter(|tag| tag.is_source())
        .ok_or_else(|| MoveError::InvalidSource(source.to_string()))?;

    let destination_tag = destination
        .parse::<LocationTag>()
        .ok()
        .filter(|tag| tag.is_destination())
        .ok_or_else(|| MoveError::InvalidDestination(destination.to_string()))?;

    debug!("[Syntax Check]  - OK: {} -> {}", source_tag, destination_tag);
    Ok(MoveCommand { source: source_tag, destination: destination_tag })
}

/// 生の入力行を空白で区切って大文字にするヘルパー。
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_uppercase).collect()
}
