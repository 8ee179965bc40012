use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A): бит 0 = двойка, бит 12 = туз.
/// Маска автоматически дедуплицирует ранги — пара внутри пяти карт
/// не создаст ложный стрит из четырёх различных значений.
pub type RankMask = u16;

/// Окно из пяти подряд идущих битов (2-3-4-5-6 при сдвиге 0).
const RUN_OF_FIVE: RankMask = 0b1_1111;

/// Маска wheel-стрита A-2-3-4-5: единственное исключение из
/// правила «пять подряд идущих рангов».
pub const WHEEL_MASK: RankMask =
    (1 << (Rank::Ace as u8 - 2)) | (1 << 0) | (1 << 1) | (1 << 2) | (1 << 3);

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << ((rank as u8) - 2)
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Проверяем от самого сильного (broadway) к слабейшему,
/// wheel (A2345) — отдельным случаем со старшей Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    for shift in (0u8..=8).rev() {
        let window = RUN_OF_FIVE << shift;
        if rank_mask & window == window {
            return Some(straight_high(shift));
        }
    }

    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }

    None
}

/// Старшая карта стрита по сдвигу окна: сдвиг 0 → 23456 (старшая Six),
/// сдвиг 8 → TJQKA (старшая Ace).
fn straight_high(shift: u8) -> Rank {
    match shift {
        0 => Rank::Six,
        1 => Rank::Seven,
        2 => Rank::Eight,
        3 => Rank::Nine,
        4 => Rank::Ten,
        5 => Rank::Jack,
        6 => Rank::Queen,
        7 => Rank::King,
        _ => Rank::Ace,
    }
}
