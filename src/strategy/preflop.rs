use crate::domain::card::Card;

/// Эвристическая сила стартовой руки (до открытия общих карт), в [0,1].
///
/// Статическая тотальная функция: ни случайности, ни истории.
/// На входе ожидаются ровно 2 карманные карты; любое другое число
/// даёт нейтральные 0.5.
pub fn estimate_preflop_strength(hole: &[Card]) -> f64 {
    if hole.len() != 2 {
        return 0.5;
    }

    let rank1 = hole[0].rank.value();
    let rank2 = hole[1].rank.value();
    let suited = hole[0].suit == hole[1].suit;
    let paired = rank1 == rank2;

    let high = rank1.max(rank2);
    let low = rank1.min(rank2);

    // Карманные пары: сила убывает с рангом.
    if paired {
        return match rank1 {
            14 => 0.95,       // AA
            13 => 0.90,       // KK
            12 => 0.85,       // QQ
            11 => 0.80,       // JJ
            10 => 0.75,       // TT
            8..=9 => 0.70,    // 88-99
            6..=7 => 0.60,    // 66-77
            _ => 0.50,        // мелкие пары
        };
    }

    // Старшие одномастные комбинации.
    if suited {
        if high == 14 && low >= 13 {
            return 0.85; // AKs
        }
        if high == 14 && low >= 12 {
            return 0.80; // AQs
        }
        if high == 14 && low >= 11 {
            return 0.75; // AJs
        }
        if high == 14 && low >= 10 {
            return 0.70; // ATs
        }
        if high == 13 && low >= 12 {
            return 0.75; // KQs
        }
        if high >= 11 && low >= 10 {
            return 0.65; // старшие одномастные коннекторы
        }
    }

    // Старшие разномастные комбинации.
    if high == 14 && low >= 13 {
        return 0.80; // AK
    }
    if high == 14 && low >= 12 {
        return 0.75; // AQ
    }
    if high == 14 && low >= 11 {
        return 0.70; // AJ
    }
    if high == 13 && low >= 12 {
        return 0.70; // KQ
    }

    // Одномастные коннекторы (гэп не больше двух).
    if suited && high - low <= 2 {
        return 0.55 + (high as f64 - 7.0) * 0.02;
    }

    // Всё остальное — от старших карт, с потолком 0.65.
    let base = 0.3 + high as f64 / 28.0 + low as f64 / 56.0;
    base.min(0.65)
}
