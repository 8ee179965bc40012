//! Оркестрация одного решения: снапшот → карты →
//! {префлоп-таблица | классификатор + Monte Carlo} → политика.
//!
//! Состояние между вызовами не хранится; каждый вызов самодостаточен.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::api::GameSnapshot;
use crate::domain::card::{Card, CardParseError};
use crate::domain::chips::Chips;
use crate::eval::{evaluate_hand, hand_strength};
use crate::strategy::montecarlo::{sample_count, simulate};
use crate::strategy::policy::{decide, Decision, DecisionPoint};
use crate::strategy::pot_odds::calculate_pot_odds;
use crate::strategy::preflop::estimate_preflop_strength;
use crate::strategy::RandomSource;

/// Ошибки разбора снапшота. Все они восстановимые: внешний polling-цикл
/// пропускает этот ход и пробует на следующем снапшоте.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Card(#[from] CardParseError),

    #[error("Ожидалось ровно 2 карманные карты, получено {0}")]
    WrongHoleCardCount(usize),

    #[error("Недопустимое число общих карт: {0} (ожидалось 0, 3, 4 или 5)")]
    InvalidBoardSize(usize),
}

/// Выбрать действие для текущей точки решения.
///
/// До флопа сила и вероятность победы берутся из статической
/// префлоп-таблицы; после — классификатор + Monte Carlo с числом
/// итераций по улице. Ошибки классификатора/симулятора отсюда не
/// выходят — наружу уходят только ошибки разбора входа.
pub fn make_decision(
    snapshot: &GameSnapshot,
    rng: &mut impl RandomSource,
) -> Result<Decision, BotError> {
    // Действие нужно выдать всегда; без вариантов — fold.
    if snapshot.valid_actions.is_empty() {
        return Ok(Decision::fold("нет допустимых действий"));
    }

    let hole = parse_cards(&snapshot.your_cards)?;
    if hole.len() != 2 {
        return Err(BotError::WrongHoleCardCount(hole.len()));
    }

    let shared = parse_cards(&snapshot.community_cards)?;
    if !matches!(shared.len(), 0 | 3 | 4 | 5) {
        return Err(BotError::InvalidBoardSize(shared.len()));
    }

    let (strength, win_probability) = if shared.is_empty() {
        // Префлоп: эвристическая таблица, она же и есть оценка эквити.
        let strength = estimate_preflop_strength(&hole);
        (strength, strength)
    } else {
        let mut all_cards = Vec::with_capacity(hole.len() + shared.len());
        all_cards.extend_from_slice(&hole);
        all_cards.extend_from_slice(&shared);

        let category = evaluate_hand(&all_cards);
        let strength = hand_strength(&all_cards);

        let opponents = count_active_opponents(snapshot);
        let samples = sample_count(snapshot.street());
        let win_probability = simulate(&hole, &shared, opponents, samples, rng);

        debug!(
            "текущая рука: {category}, соперников: {opponents}, итераций: {samples}"
        );
        (strength, win_probability)
    };

    let pot = Chips(snapshot.pot);
    let to_call = Chips(snapshot.current_bet);

    // Pot odds считаем только когда есть что уравнивать (иначе 0.0 —
    // ветка profitability тогда всегда проходит, как и задумано).
    let pot_odds = if to_call.is_zero() {
        0.0
    } else {
        calculate_pot_odds(pot, to_call)
    };

    debug!(
        "сила руки: {:.1}%, вероятность победы: {:.1}%, pot odds: {:.1}%",
        strength * 100.0,
        win_probability * 100.0,
        pot_odds * 100.0
    );

    let spot = DecisionPoint {
        pot,
        to_call,
        stack: Chips(snapshot.your_chips),
        legal: snapshot.valid_actions.clone(),
    };

    let decision = decide(&spot, win_probability, strength, pot_odds, rng);
    debug!("решение: {:?} — {}", decision.kind, decision.rationale);

    Ok(decision)
}

/// Сколько соперников ещё в раздаче: все игроки, кроме нас и сфолдивших.
/// Пустой список игроков трактуем как одного соперника.
pub fn count_active_opponents(snapshot: &GameSnapshot) -> usize {
    if snapshot.players.is_empty() {
        return 1;
    }

    let our_id = snapshot.your_player_id.as_deref().unwrap_or("");
    snapshot
        .players
        .iter()
        .filter(|p| p.id != our_id)
        .filter(|p| p.status != "Folded")
        .count()
}

fn parse_cards(tokens: &[String]) -> Result<Vec<Card>, CardParseError> {
    tokens.iter().map(|t| Card::from_str(t)).collect()
}
