// src/config/rules.rs
//! ルール判定で使う定数を定義するよ！

/// カード移動コマンドの目印。`M <移動元> <移動先>` の `M`。
pub const MOVE_COMMAND: &str = "M";
/// 移動コマンドのトークン数 (コマンド + 移動元 + 移動先)。
pub const MOVE_COMMAND_PARTS: usize = 3;

pub const NUM_COLUMNS: usize = 7; // 場札 (A..G)
pub const NUM_STACKS: usize = 4; // 組札 (SA..SD)
pub const CARDS_PER_SUIT: usize = 13; // 組札1つが完成する枚数

/// 組札で Ace の次に King... じゃなくて、King の上に Ace を置いたときの序数の差。
/// 特別扱いで通しちゃうケース (詳しくは `logic::rules::foundation`)。
pub const STACK_WRAP_DIFFERENCE: i8 = -12;
