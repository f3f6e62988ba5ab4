// src/config/help.rs
//! ヘルプ文だよ。プロセス全体で1回だけ組み立てて、あとは読むだけ！📖

use std::sync::LazyLock;

use itertools::Itertools;

use crate::components::location::LocationTag;
use crate::config::rules::MOVE_COMMAND;

/// エラーメッセージの最後にくっつける「ヘルプを見てね」の一文。
pub const HELP_POINTER: &str = "See Help for instructions.";

/// 移動コマンドの説明。語彙は `LocationTag` から作るので、定義とずれないよ。
pub static HELP_TEXT: LazyLock<String> = LazyLock::new(|| {
    let sources = LocationTag::SOURCES.iter().map(|tag| tag.token()).join(", ");
    let destinations = LocationTag::DESTINATIONS.iter().map(|tag| tag.token()).join(", ");
    format!(
        "Move cards with: {MOVE_COMMAND} <source> <destination>\n\
         Valid sources: {sources}\n\
         Valid destinations: {destinations}\n\
         O is the stock, A-G are the columns, SA-SD are the stacks.\n\
         Stacks are built up by suit from Ace to King, one card at a time.\n\
         Columns are built down from King in alternating colors."
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_the_vocabulary() {
        assert!(HELP_TEXT.starts_with("Move cards with: M <source> <destination>"));
        assert!(HELP_TEXT.contains("Valid sources: O, A, A2, B, C, C10, D, E, F, G, SA, SB, SC, SD"));
        assert!(HELP_TEXT.contains("Valid destinations: A, B, C, D, E, F, G, SA, SB, SC, SD"));
    }
}
