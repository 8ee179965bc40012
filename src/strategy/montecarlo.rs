use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::street::Street;
use crate::eval::{evaluate_hand, hand_strength};

use super::RandomSource;

/// Порог, внутри которого силы рук равной категории считаем равными.
const TIE_EPSILON: f64 = 0.001;

/// Monte Carlo оценка вероятности победы против `opponents` соперников.
///
/// Каждая из `samples` итераций независима:
///   1) остаток колоды = 52 карты минус свои минус борд (без дубликатов);
///   2) перемешиваем остаток;
///   3) добираем борд до 5 карт;
///   4) раздаём по 2 карты соперникам по порядку; если колода кончилась,
///      оставшиеся соперники в этой итерации не раздаются;
///   5) победа — если против КАЖДОГО разданного соперника наша категория
///      строго старше, либо равна при строго большей силе; ничья — если
///      кто-то сравнялся и по категории, и по силе (в пределах 0.001),
///      а нас никто не побил.
///
/// Результат = (wins + 0.5 * ties) / samples.
/// Вырожденный вход (не 2 карманные карты, samples == 0) → нейтральные 0.5.
pub fn simulate(
    hole: &[Card],
    shared: &[Card],
    opponents: usize,
    samples: usize,
    rng: &mut impl RandomSource,
) -> f64 {
    if hole.len() != 2 || samples == 0 {
        return 0.5;
    }

    let mut wins: u64 = 0;
    let mut ties: u64 = 0;

    // Рабочая копия остатка колоды — своя на вызов, соседям не видна.
    let mut used = Vec::with_capacity(hole.len() + shared.len());
    used.extend_from_slice(hole);
    used.extend_from_slice(shared);

    let mut deck = Deck::standard_52();
    deck.remove_cards(&used);
    let mut remaining = deck.cards;

    let board_needed = 5usize.saturating_sub(shared.len());

    for _ in 0..samples {
        rng.shuffle(&mut remaining);

        // Полный борд этой итерации.
        let mut board = Vec::with_capacity(5);
        board.extend_from_slice(shared);
        board.extend_from_slice(&remaining[..board_needed]);

        // Наша 7-карточная рука.
        let mut our_cards = Vec::with_capacity(7);
        our_cards.extend_from_slice(hole);
        our_cards.extend_from_slice(&board);
        let our_category = evaluate_hand(&our_cards);
        let our_strength = hand_strength(&our_cards);

        let mut we_win = true;
        let mut tied = false;

        for opp in 0..opponents {
            let card_index = board_needed + opp * 2;
            if card_index + 1 >= remaining.len() {
                break; // колода исчерпана — дальше соперников не раздаём
            }

            let mut opp_cards = Vec::with_capacity(7);
            opp_cards.push(remaining[card_index]);
            opp_cards.push(remaining[card_index + 1]);
            opp_cards.extend_from_slice(&board);

            let opp_category = evaluate_hand(&opp_cards);
            let opp_strength = hand_strength(&opp_cards);

            if opp_category > our_category
                || (opp_category == our_category && opp_strength > our_strength)
            {
                we_win = false;
                break;
            } else if opp_category == our_category
                && (opp_strength - our_strength).abs() < TIE_EPSILON
            {
                tied = true;
            }
        }

        if we_win {
            if tied {
                ties += 1;
            } else {
                wins += 1;
            }
        }
    }

    (wins as f64 + ties as f64 * 0.5) / samples as f64
}

/// Число итераций по улице: чем меньше неизвестных карт до шоудауна,
/// тем больше итераций (дисперсия должна падать к риверу).
pub fn sample_count(street: Street) -> usize {
    match street {
        Street::Flop => 2000,
        Street::Turn => 3000,
        Street::River => 5000,
        Street::Preflop => 1000,
    }
}
