use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

use super::pot_odds::is_call_profitable;
use super::RandomSource;

/// Минимальный шаг рейза в фишках (транспорт не сообщает блайнды).
pub const MIN_RAISE_STEP: Chips = Chips(20);

/// Фиксированный нижний порог «короткого» стека.
pub const SHORT_STACK_FLOOR: Chips = Chips(100);

/// Вероятность slow play с монстром (check вместо ставки).
const SLOW_PLAY_CHANCE: f64 = 0.3;

/// Вероятность лёгкого полублефа со средней рукой.
const BLUFF_CHANCE: f64 = 0.15;

/// Вид действия, как его называет транспорт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// Выбранное действие. Сумма есть только у рейза.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionKind {
    Fold,
    Check,
    Call,
    Raise(Chips),
    AllIn,
}

impl DecisionKind {
    pub fn action_kind(&self) -> ActionKind {
        match self {
            DecisionKind::Fold => ActionKind::Fold,
            DecisionKind::Check => ActionKind::Check,
            DecisionKind::Call => ActionKind::Call,
            DecisionKind::Raise(_) => ActionKind::Raise,
            DecisionKind::AllIn => ActionKind::AllIn,
        }
    }

    pub fn amount(&self) -> Option<Chips> {
        match self {
            DecisionKind::Raise(amount) => Some(*amount),
            _ => None,
        }
    }
}

/// Решение за один ход. Создаётся заново на каждой точке решения,
/// не мутируется, сразу уходит транспорту.
///
/// `rationale` — диагностическая строка для логов/наблюдаемости,
/// на управление она НЕ влияет.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub kind: DecisionKind,
    pub rationale: String,
}

impl Decision {
    pub fn new(kind: DecisionKind, rationale: impl Into<String>) -> Self {
        Decision {
            kind,
            rationale: rationale.into(),
        }
    }

    pub fn fold(rationale: impl Into<String>) -> Self {
        Decision::new(DecisionKind::Fold, rationale)
    }

    pub fn check(rationale: impl Into<String>) -> Self {
        Decision::new(DecisionKind::Check, rationale)
    }

    pub fn call(rationale: impl Into<String>) -> Self {
        Decision::new(DecisionKind::Call, rationale)
    }
}

/// Числа текущей точки решения: банк, сумма колла, свой стек и
/// множество допустимых действий из снапшота.
#[derive(Clone, Debug)]
pub struct DecisionPoint {
    pub pot: Chips,
    pub to_call: Chips,
    pub stack: Chips,
    pub legal: Vec<ActionKind>,
}

impl DecisionPoint {
    fn allows(&self, kind: ActionKind) -> bool {
        self.legal.contains(&kind)
    }
}

/// Ярусная политика: ветки проверяются сверху вниз, побеждает первая,
/// чьё действие допустимо. Ни одна ветка не выбирает действие вне
/// `legal`; если играбельных действий нет вообще — fold.
pub fn decide(
    spot: &DecisionPoint,
    win_probability: f64,
    hand_strength: f64,
    pot_odds: f64,
    rng: &mut impl RandomSource,
) -> Decision {
    if spot.legal.is_empty() {
        return Decision::fold("нет допустимых действий");
    }

    let win_pct = win_probability * 100.0;
    let is_short_stack =
        spot.stack.as_f64() < (spot.pot.as_f64() * 0.15).max(SHORT_STACK_FLOOR.as_f64());

    // Очень сильная рука (> 80%).
    if win_probability > 0.80 {
        if spot.allows(ActionKind::Raise) {
            let amount = raise_amount(spot, 0.3, 0.5, rng);
            return Decision::new(
                DecisionKind::Raise(amount),
                format!("очень сильная рука ({win_pct:.0}%)"),
            );
        }
        if spot.allows(ActionKind::Call) {
            return Decision::call("очень сильная рука, рейз недоступен");
        }
        if spot.allows(ActionKind::Check) {
            // Иногда нарочно чекаем монстра, чтобы не раскрывать силу.
            if rng.next_f64() < SLOW_PLAY_CHANCE && !spot.pot.is_zero() {
                return Decision::check("slow play с монстром");
            }
            return Decision::check("очень сильная рука");
        }
    }

    // Сильная рука (60–80%).
    if win_probability > 0.60 {
        if spot.allows(ActionKind::Raise) {
            let amount = raise_amount(spot, 0.2, 0.4, rng);
            return Decision::new(
                DecisionKind::Raise(amount),
                format!("сильная рука ({win_pct:.0}%)"),
            );
        }
        if spot.allows(ActionKind::Call) {
            return Decision::call("сильная рука");
        }
        if spot.allows(ActionKind::Check) {
            return Decision::check("сильная рука");
        }
    }

    // Средняя рука (40–60%).
    if win_probability > 0.40 {
        if spot.allows(ActionKind::Check) {
            return Decision::check("средняя рука, ставки нет");
        }

        if spot.allows(ActionKind::Call) {
            if is_call_profitable(win_probability, pot_odds) {
                return Decision::call("средняя рука с выгодными pot odds");
            }
            if spot.to_call.as_f64() < spot.stack.as_f64() * 0.1 {
                return Decision::call("мелкая инвестиция");
            }
        }

        // Изредка — небольшой полублеф даже со средней рукой.
        if spot.allows(ActionKind::Raise) && rng.next_f64() < BLUFF_CHANCE {
            let amount = raise_amount(spot, 0.15, 0.25, rng);
            return Decision::new(DecisionKind::Raise(amount), "лёгкий полублеф");
        }
    }

    // Слабая рука (20–40%).
    if win_probability > 0.20 {
        if spot.allows(ActionKind::Check) {
            return Decision::check("слабая рука, бесплатный check");
        }

        if spot.allows(ActionKind::Call)
            && (pot_odds < 0.15 || spot.to_call.as_f64() < spot.stack.as_f64() * 0.05)
        {
            return Decision::call("исключительные pot odds или совсем мелкий call");
        }
    }

    // Очень слабая рука (< 20%) — почти всегда fold.
    // All-in на выживание ТОЛЬКО при реальном отчаянии (совсем мало фишек)
    // И хотя бы приличной руке.
    if is_short_stack && spot.allows(ActionKind::AllIn) {
        let desperate = spot.stack.as_f64() < spot.pot.as_f64() / 15.0;
        if desperate && (win_probability > 0.40 || hand_strength > 0.60) {
            return Decision::new(
                DecisionKind::AllIn,
                format!(
                    "отчаянный all-in ({} фишек, {win_pct:.0}% win prob)",
                    spot.stack.0
                ),
            );
        }
    }

    if spot.allows(ActionKind::Check) {
        return Decision::check("check по умолчанию");
    }

    Decision::fold(format!("слишком слабая рука ({win_pct:.0}%)"))
}

/// Размер рейза: to_call + банк * случайный коэффициент из диапазона,
/// с полом to_call + MIN_RAISE_STEP и потолком в собственный стек.
fn raise_amount(
    spot: &DecisionPoint,
    min_pot_ratio: f64,
    max_pot_ratio: f64,
    rng: &mut impl RandomSource,
) -> Chips {
    let ratio = min_pot_ratio + rng.next_f64() * (max_pot_ratio - min_pot_ratio);
    let raw = spot.to_call.0 + (spot.pot.as_f64() * ratio) as u64;

    let min_raise = (spot.to_call + MIN_RAISE_STEP).0;
    Chips(raw.max(min_raise).min(spot.stack.0))
}
