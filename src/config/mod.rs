// src/config/mod.rs
//! ゲームルールの定数とヘルプ文をまとめるよ！

pub mod rules;
pub mod help;

pub use help::{HELP_TEXT, HELP_POINTER};
pub use rules::*;
