// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//!
//! 移動のチェックは3段階で、それぞれ独立してる:
//! 1. `syntax`: 入力の文法
//! 2. `structure`: デッキ単位 (同じデッキ、空、山札、枚数、裏向き)
//! 3. `move_validation`: カードのランクとスートと色
//!
//! どのチェックもデッキを読むだけで、変更はしないよ。

pub mod common;
pub mod syntax;
pub mod structure;
pub mod foundation;
pub mod tableau;
pub mod move_validation;
pub mod stock_waste;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use syntax::*;
pub use structure::*;
pub use foundation::*;
pub use tableau::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use win_condition::*;
