// src/components/location.rs
//! コマンドで使う「場所」の語彙 (vocabulary) を定義するよ！📍
//!
//! 使えるトークンは決まった閉じた集合で、既存のコマンドパーサーとの互換性のために
//! 一字一句そのまま (`O`, `A2`, `C10`, `SA` ...) じゃないとダメ。
//! 文字列の比較をあちこちに散らばらせないで、全部この enum 経由で判定するんだ。

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

/// コマンドに書ける場所トークン1つ1つに対応する enum だよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationTag {
    /// `O`: 山札の見出し。めくった Waste の一番上のカードを指す。
    Stock,
    /// `A2`: A 列の 2 行目 (予約された座標トークン)。
    CellA2,
    /// `C10`: C 列の 10 行目 (予約された座標トークン)。
    CellC10,
    ColumnA,
    ColumnB,
    ColumnC,
    ColumnD,
    ColumnE,
    ColumnF,
    ColumnG,
    StackA,
    StackB,
    StackC,
    StackD,
}

/// トークンを実際のデッキの場所に直したもの。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// 山札の見出し (`O`)。中身は Waste のデッキ。
    Talon,
    /// 場札の列 (0..7)。`row` があればその行のカードから、なければ一番上のカードだけ。
    Column { column: usize, row: Option<usize> },
    /// 組札 (0..4)。
    Stack(usize),
}

impl LocationTag {
    /// 移動元として書けるトークン (14個)。
    pub const SOURCES: [LocationTag; 14] = [
        LocationTag::Stock,
        LocationTag::ColumnA,
        LocationTag::CellA2,
        LocationTag::ColumnB,
        LocationTag::ColumnC,
        LocationTag::CellC10,
        LocationTag::ColumnD,
        LocationTag::ColumnE,
        LocationTag::ColumnF,
        LocationTag::ColumnG,
        LocationTag::StackA,
        LocationTag::StackB,
        LocationTag::StackC,
        LocationTag::StackD,
    ];

    /// 移動先として書けるトークン (11個)。山札と座標は移動先にはなれないよ。
    pub const DESTINATIONS: [LocationTag; 11] = [
        LocationTag::ColumnA,
        LocationTag::ColumnB,
        LocationTag::ColumnC,
        LocationTag::ColumnD,
        LocationTag::ColumnE,
        LocationTag::ColumnF,
        LocationTag::ColumnG,
        LocationTag::StackA,
        LocationTag::StackB,
        LocationTag::StackC,
        LocationTag::StackD,
    ];

    /// コマンド上の表記。
    pub fn token(self) -> &'static str {
        match self {
            LocationTag::Stock => "O",
            LocationTag::CellA2 => "A2",
            LocationTag::CellC10 => "C10",
            LocationTag::ColumnA => "A",
            LocationTag::ColumnB => "B",
            LocationTag::ColumnC => "C",
            LocationTag::ColumnD => "D",
            LocationTag::ColumnE => "E",
            LocationTag::ColumnF => "F",
            LocationTag::ColumnG => "G",
            LocationTag::StackA => "SA",
            LocationTag::StackB => "SB",
            LocationTag::StackC => "SC",
            LocationTag::StackD => "SD",
        }
    }

    pub fn is_source(self) -> bool {
        Self::SOURCES.contains(&self)
    }

    pub fn is_destination(self) -> bool {
        Self::DESTINATIONS.contains(&self)
    }

    /// トークンが指してる場所。
    pub fn location(self) -> Location {
        match self {
            LocationTag::Stock => Location::Talon,
            LocationTag::CellA2 => Location::Column { column: 0, row: Some(2) },
            LocationTag::CellC10 => Location::Column { column: 2, row: Some(10) },
            LocationTag::ColumnA => Location::Column { column: 0, row: None },
            LocationTag::ColumnB => Location::Column { column: 1, row: None },
            LocationTag::ColumnC => Location::Column { column: 2, row: None },
            LocationTag::ColumnD => Location::Column { column: 3, row: None },
            LocationTag::ColumnE => Location::Column { column: 4, row: None },
            LocationTag::ColumnF => Location::Column { column: 5, row: None },
            LocationTag::ColumnG => Location::Column { column: 6, row: None },
            LocationTag::StackA => Location::Stack(0),
            LocationTag::StackB => Location::Stack(1),
            LocationTag::StackC => Location::Stack(2),
            LocationTag::StackD => Location::Stack(3),
        }
    }
}

/// 語彙に入ってないトークンだったときのエラー。中身はそのトークン。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocation(pub String);

impl fmt::Display for UnknownLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not a known location", self.0)
    }
}

impl std::error::Error for UnknownLocation {}

impl FromStr for LocationTag {
    type Err = UnknownLocation;

    /// 大文字小文字は区別するよ (呼び出し側で大文字にしてから渡す約束)。
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::SOURCES
            .iter()
            .chain(Self::DESTINATIONS.iter())
            .copied()
            .find(|tag| tag.token() == token)
            .ok_or_else(|| UnknownLocation(token.to_string()))
    }
}

impl fmt::Display for LocationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
