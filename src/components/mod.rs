// src/components/mod.rs

// カード・デッキ・場所の語彙。ルール判定の土台になるデータだよ！
pub mod card;
pub mod deck;
pub mod location;
