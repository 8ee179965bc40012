use crate::domain::card::Card;
use crate::eval::{evaluate_hand, HandCategory};

/// Грубая оценка числа аутов (карт, улучшающих руку).
///
/// Упрощённая эвристика без перебора колоды: до флопа — по структуре
/// карманных карт, после — по текущей категории.
pub fn estimate_outs(hole: &[Card], shared: &[Card]) -> u8 {
    if shared.is_empty() {
        if hole.len() != 2 {
            return 6;
        }

        if hole[0].rank == hole[1].rank {
            return 2; // пара: ~2 аута до сета
        }
        if hole[0].suit == hole[1].suit {
            return 9; // одномастные: ~9 аутов до флеша
        }
        let gap = hole[0].rank.value().abs_diff(hole[1].rank.value());
        if gap <= 4 {
            return 8; // связанные карты: ~8 аутов до стрита
        }
        return 6;
    }

    let mut all_cards = Vec::with_capacity(hole.len() + shared.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(shared);

    match evaluate_hand(&all_cards) {
        HandCategory::HighCard => 6,      // ищем пару или лучше
        HandCategory::OnePair => 5,       // ищем две пары / сет
        HandCategory::TwoPair => 4,       // ищем фулл-хаус
        HandCategory::ThreeOfAKind => 7,  // ищем фулл или каре
        HandCategory::Straight | HandCategory::Flush => 10,
        _ => 15, // уже очень сильная рука
    }
}
