use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт — просто упорядоченный список.
/// Перемешивание делает симулятор (через RandomSource из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            for rank in [
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
                Rank::Nine,
                Rank::Ten,
                Rank::Jack,
                Rank::Queen,
                Rank::King,
                Rank::Ace,
            ] {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Убрать из колоды уже видимые карты (свои + борд).
    /// Дубликатов в результате быть не может по построению.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.iter().any(|r| r == c));
    }
}
