use core::fmt;

use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе (от слабейшей к сильнейшей).
///
/// Числовое значение — ЕДИНСТВЕННЫЙ ключ сравнения двух рук;
/// нигде больше оно не пересчитывается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    /// Числовое значение категории: 1 (high card) .. 10 (royal flush).
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Человеческое описание категории (для логов и rationale).
impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        };
        write!(f, "{name}")
    }
}
