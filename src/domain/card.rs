use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Числовое значение ранга: 2..14 (J=11, Q=12, K=13, A=14).
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Обычная покерная карта (52-карточная колода).
///
/// По силе карты сравниваются только по рангу (через `Rank: Ord`);
/// масть участвует лишь в определении flush и в идентичности карты.
/// Поэтому `Ord` на самой карте сознательно не реализован.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Ошибки разбора текстового токена карты.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Токен карты слишком короткий: {0:?}")]
    TooShort(String),

    #[error("Неизвестный ранг: {0:?}")]
    InvalidRank(String),

    #[error("Неизвестная масть: {0:?}")]
    InvalidSuit(char),
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            r => write!(f, "{}", *r as u8),
        }
    }
}

impl fmt::Display for Card {
    /// Формат транспорта: `A♠`, `10♦`, `7♣`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг токена вида "A♠", "10♦", "7♣".
///
/// Последний символ — масть, всё до него — токен ранга.
/// Принимаем также буквенные масти ("Ah", "Td") и "T" как синоним "10";
/// при форматировании всё канонизируется к виду транспорта.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 2 {
            return Err(CardParseError::TooShort(s.to_string()));
        }

        let suit_ch = chars[chars.len() - 1];
        let rank_str: String = chars[..chars.len() - 1].iter().collect();

        let rank = match rank_str.as_str() {
            "A" | "a" => Rank::Ace,
            "K" | "k" => Rank::King,
            "Q" | "q" => Rank::Queen,
            "J" | "j" => Rank::Jack,
            "T" | "t" => Rank::Ten,
            other => match other.parse::<u8>() {
                Ok(v @ 2..=10) => num_to_rank(v),
                _ => return Err(CardParseError::InvalidRank(rank_str)),
            },
        };

        let suit = match suit_ch {
            '♣' | 'c' | 'C' => Suit::Clubs,
            '♦' | 'd' | 'D' => Suit::Diamonds,
            '♥' | 'h' | 'H' => Suit::Hearts,
            '♠' | 's' | 'S' => Suit::Spades,
            _ => return Err(CardParseError::InvalidSuit(suit_ch)),
        };

        Ok(Card { rank, suit })
    }
}

fn num_to_rank(v: u8) -> Rank {
    match v {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        _ => Rank::Ace,
    }
}
