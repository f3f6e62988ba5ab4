// src/protocol.rs

// このファイルは、移動の判定結果を外 (UI とかサーバーとか) に渡す形式を定義するよ！💌
// `serde` で JSON にしたり、JSON から戻したりできるようにしておく。
use serde::{Serialize, Deserialize};

use crate::error::{CheckPhase, MoveError};
use crate::logic::executor::MoveReport;

/// カード移動の判定結果。これを JSON にして外に送る！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MoveVerdict {
    /// 移動が通った。
    Accepted {
        report: MoveReport,
    },
    /// 移動が通らなかった。`phase` でどのチェックで落ちたか分かる。
    Rejected {
        phase: CheckPhase,
        /// 画面にそのまま出せる理由。プレイヤーのミスならヘルプへの一文も付いてる。
        reason: String,
    },
}

impl MoveVerdict {
    pub fn from_result(result: &Result<MoveReport, MoveError>) -> Self {
        match result {
            Ok(report) => MoveVerdict::Accepted { report: report.clone() },
            Err(err) => MoveVerdict::Rejected { phase: err.phase(), reason: err.to_string() },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveVerdict::Accepted { .. })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::components::location::LocationTag;

    #[test]
    fn rejected_verdict_as_json() {
        let verdict = MoveVerdict::from_result(&Err(MoveError::SameDeck));
        assert!(!verdict.is_accepted());
        let json = verdict.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"Rejected":{"phase":"Structure","reason":"Move source and destination can't be the same\nSee Help for instructions."}}"#
        );
    }

    #[test]
    fn rejected_reason_matches_the_displayed_error() {
        for err in [MoveError::InvalidSource("Z".to_string()), MoveError::ColumnRankGap, MoveError::InvisibleCard] {
            let verdict = MoveVerdict::from_result(&Err(err.clone()));
            match verdict {
                MoveVerdict::Rejected { phase, reason } => {
                    assert_eq!(phase, err.phase());
                    assert_eq!(reason, err.to_string());
                    assert!(reason.ends_with(crate::config::help::HELP_POINTER), "ヘルプへの一文が付いてるはず");
                }
                MoveVerdict::Accepted { .. } => panic!("通らないはずの移動が通った"),
            }
        }

        let defect = MoveError::from(crate::error::ContractViolation::JokerHasNoColor);
        let verdict = MoveVerdict::from_result(&Err(defect.clone()));
        assert_eq!(
            verdict,
            MoveVerdict::Rejected { phase: CheckPhase::Contract, reason: defect.message() },
            "バグはヘルプに誘導しないはず"
        );
    }

    #[test]
    fn accepted_verdict_survives_json() {
        let report = MoveReport {
            source: LocationTag::Stock,
            destination: LocationTag::StackA,
            card: Card::new(Suit::Spade, Rank::Ace),
            moved: 1,
            revealed: false,
        };
        let verdict = MoveVerdict::from_result(&Ok(report));
        assert!(verdict.is_accepted());
        let json = verdict.to_json().unwrap();
        assert!(json.contains(r#""source":"Stock""#));
        assert_eq!(MoveVerdict::from_json(&json).unwrap(), verdict);
        println!("MoveVerdict の JSON テスト、成功！🎉");
    }
}
