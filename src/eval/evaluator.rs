use crate::domain::card::{Card, Rank, Suit};

use super::combos::five_card_combos;
use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Лучшая категория для набора из 5–7 карт.
///
/// Для 6–7 карт перебираем ВСЕ 5-карточные подмножества и берём
/// максимум по категории. Внутри одной категории подмножества НЕ
/// пересравниваются по силе — для выбора победителя хватает самой
/// категории (поведение закреплено тестом).
///
/// Меньше 5 карт — вырожденный случай: HighCard без перебора.
pub fn evaluate_hand(cards: &[Card]) -> HandCategory {
    if cards.len() < 5 {
        return HandCategory::HighCard;
    }

    if cards.len() == 5 {
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        return evaluate_five(&five);
    }

    let mut best = HandCategory::HighCard;
    for idx in five_card_combos(cards.len()) {
        let five = [
            cards[idx[0]],
            cards[idx[1]],
            cards[idx[2]],
            cards[idx[3]],
            cards[idx[4]],
        ];
        let category = evaluate_five(&five);
        if category > best {
            best = category;
        }
    }
    best
}

/// Нормированная сила руки в [0,1]: категория/10 плюс бонус за старшую
/// карту всего набора (макс. 14/140 = 0.1), с потолком 1.0.
///
/// Используется ТОЛЬКО как тай-брейкер между руками равной категории.
pub fn hand_strength(cards: &[Card]) -> f64 {
    let base = evaluate_hand(cards).value() as f64 / 10.0;

    if cards.len() >= 5 {
        let high = cards
            .iter()
            .map(|c| c.rank.value())
            .max()
            .unwrap_or(Rank::Two.value());
        (base + high as f64 / 140.0).min(1.0)
    } else {
        base
    }
}

/// Категория строго 5-карточной комбинации.
/// Предикаты проверяются от сильнейшего к слабейшему.
fn evaluate_five(cards: &[Card; 5]) -> HandCategory {
    // Подсчёт мастей и рангов одним проходом.
    let mut suit_counts = [0u8; 4]; // 0:clubs,1:diamonds,2:hearts,3:spades
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        let suit_idx = match card.suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        suit_counts[suit_idx] += 1;
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight_high = detect_straight(rank_mask);

    if is_flush {
        if let Some(high) = straight_high {
            return if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
        }
    }

    let has_quads = rank_counts.iter().any(|&c| c == 4);
    if has_quads {
        return HandCategory::FourOfAKind;
    }

    let has_trips = rank_counts.iter().any(|&c| c == 3);
    let pairs = rank_counts.iter().filter(|&&c| c == 2).count();

    if has_trips && pairs >= 1 {
        return HandCategory::FullHouse;
    }
    if is_flush {
        return HandCategory::Flush;
    }
    if straight_high.is_some() {
        return HandCategory::Straight;
    }
    if has_trips {
        return HandCategory::ThreeOfAKind;
    }
    if pairs >= 2 {
        return HandCategory::TwoPair;
    }
    if pairs == 1 {
        return HandCategory::OnePair;
    }

    HandCategory::HighCard
}
