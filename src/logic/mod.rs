// src/logic/mod.rs
//! ゲームのロジック (ルール判定と移動の実行) をまとめるよ！

pub mod rules;
pub mod table;
pub mod executor;

pub use executor::{DrawOutcome, MoveReport};
pub use table::GameTable;
