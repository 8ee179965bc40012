//! Тесты ярусной политики решений.
//!
//! Рандомизированные ветки (slow play, полублеф, размер рейза)
//! достаются через фиксированный RandomSource.

use poker_bot::domain::chips::Chips;
use poker_bot::strategy::policy::{decide, ActionKind, DecisionKind, DecisionPoint};
use poker_bot::RandomSource;

/// RNG, который всегда возвращает одно и то же число и не перемешивает.
/// Достаточно, чтобы детерминированно включать/выключать ветки политики.
struct FixedRng(f64);

impl RandomSource for FixedRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

fn spot(pot: u64, to_call: u64, stack: u64, legal: &[ActionKind]) -> DecisionPoint {
    DecisionPoint {
        pot: Chips(pot),
        to_call: Chips(to_call),
        stack: Chips(stack),
        legal: legal.to_vec(),
    }
}

//
// ============= допустимость действий =============
//

#[test]
fn fold_only_legal_set_always_folds() {
    let s = spot(500, 100, 1000, &[ActionKind::Fold]);
    // Даже с монстром деваться некуда.
    let d = decide(&s, 0.95, 0.95, 0.1, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::Fold);
}

#[test]
fn empty_legal_set_degenerates_to_fold() {
    let s = spot(500, 100, 1000, &[]);
    let d = decide(&s, 0.95, 0.95, 0.1, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::Fold);
}

#[test]
fn decision_never_leaves_the_legal_set() {
    let legal_sets: &[&[ActionKind]] = &[
        &[ActionKind::Fold],
        &[ActionKind::Fold, ActionKind::Call],
        &[ActionKind::Fold, ActionKind::Check],
        &[ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
        &[ActionKind::Fold, ActionKind::AllIn],
        &[
            ActionKind::Fold,
            ActionKind::Check,
            ActionKind::Call,
            ActionKind::Raise,
            ActionKind::AllIn,
        ],
    ];

    for legal in legal_sets {
        for win_tenths in 0..=10 {
            let win = win_tenths as f64 / 10.0;
            for r in [0.0, 0.05, 0.5, 0.99] {
                let s = spot(300, 60, 400, legal);
                let d = decide(&s, win, win, 0.17, &mut FixedRng(r));

                // Fold — всегда допустимый последний выход.
                let kind = d.kind.action_kind();
                assert!(
                    legal.contains(&kind) || kind == ActionKind::Fold,
                    "Действие {kind:?} вне допустимого набора {legal:?} (win={win}, r={r})"
                );
            }
        }
    }
}

//
// ============= размер рейза =============
//

#[test]
fn raise_amount_respects_floor_and_ceiling() {
    // Банк 1000, колла нет, стек 100: сырой рейз 300..500 упирается в стек.
    let s = spot(1000, 0, 100, &[ActionKind::Raise]);
    let d = decide(&s, 0.9, 0.9, 0.0, &mut FixedRng(0.0));
    assert_eq!(d.kind, DecisionKind::Raise(Chips(100)), "Потолок — свой стек");

    // Банк 10, колл 50: сырой рейз 53..55 поднимается до пола to_call + 20.
    let s = spot(10, 50, 1000, &[ActionKind::Raise]);
    let d = decide(&s, 0.9, 0.9, 0.8, &mut FixedRng(0.0));
    assert_eq!(d.kind, DecisionKind::Raise(Chips(70)), "Пол — to_call + 20");
}

#[test]
fn raise_amount_stays_inside_bounds_across_random_ratios() {
    for r in [0.0, 0.25, 0.5, 0.75, 0.999] {
        let s = spot(400, 80, 900, &[ActionKind::Raise, ActionKind::Call]);
        let d = decide(&s, 0.85, 0.85, 0.2, &mut FixedRng(r));

        match d.kind {
            DecisionKind::Raise(Chips(amount)) => {
                assert!(amount >= 100, "Не меньше to_call + шаг (100)");
                assert!(amount <= 900, "Не больше стека");
            }
            other => panic!("Ожидался рейз, получили {other:?}"),
        }
    }
}

#[test]
fn strong_hand_raises_bigger_than_very_strong_tier_minimum() {
    // 60–80%: рейз 20–40% банка.
    let s = spot(1000, 0, 10_000, &[ActionKind::Raise]);
    let d = decide(&s, 0.7, 0.7, 0.0, &mut FixedRng(0.0));
    assert_eq!(d.kind, DecisionKind::Raise(Chips(200)));
}

//
// ============= ярусы =============
//

#[test]
fn very_strong_hand_calls_when_raise_unavailable() {
    let s = spot(500, 100, 1000, &[ActionKind::Fold, ActionKind::Call]);
    let d = decide(&s, 0.9, 0.9, 0.17, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::Call);
}

#[test]
fn monster_sometimes_slow_plays_a_check() {
    let legal = [ActionKind::Check];

    // next_f64 < 0.3 и банк непустой → slow play.
    let s = spot(200, 0, 1000, &legal);
    let d = decide(&s, 0.9, 0.9, 0.0, &mut FixedRng(0.0));
    assert_eq!(d.kind, DecisionKind::Check);
    assert!(d.rationale.contains("slow play"), "rationale: {}", d.rationale);

    // Иначе — обычный check той же силы.
    let d = decide(&s, 0.9, 0.9, 0.0, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Check);
    assert!(!d.rationale.contains("slow play"));
}

#[test]
fn average_hand_prefers_a_free_check() {
    let s = spot(
        300,
        0,
        1000,
        &[ActionKind::Check, ActionKind::Call, ActionKind::Raise],
    );
    let d = decide(&s, 0.5, 0.5, 0.0, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Check);
}

#[test]
fn average_hand_calls_with_good_pot_odds() {
    let s = spot(500, 100, 1000, &[ActionKind::Fold, ActionKind::Call]);
    // 0.5 > 0.17 → профитный колл.
    let d = decide(&s, 0.5, 0.5, 0.17, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Call);
}

#[test]
fn average_hand_calls_a_tiny_bet_even_without_odds() {
    // Непрофитно (0.5 < 0.6), но колл меньше 10% стека.
    let s = spot(100, 50, 1000, &[ActionKind::Fold, ActionKind::Call]);
    let d = decide(&s, 0.5, 0.5, 0.6, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Call);
}

#[test]
fn average_hand_occasionally_semi_bluffs() {
    let s = spot(200, 50, 1000, &[ActionKind::Fold, ActionKind::Raise]);

    // next_f64 < 0.15 → полублеф размером 15–25% банка.
    let d = decide(&s, 0.5, 0.5, 0.6, &mut FixedRng(0.0));
    assert_eq!(d.kind, DecisionKind::Raise(Chips(80)), "50 + 200*0.15 = 80");

    // Без удачи — ветка не срабатывает, дальше по ярусам до фолда.
    let d = decide(&s, 0.5, 0.5, 0.6, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Fold);
}

#[test]
fn weak_hand_checks_for_free_or_calls_exceptional_odds() {
    let s = spot(300, 0, 1000, &[ActionKind::Check]);
    let d = decide(&s, 0.3, 0.3, 0.0, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Check);

    // Исключительные pot odds (< 0.15).
    let s = spot(900, 100, 1000, &[ActionKind::Fold, ActionKind::Call]);
    let d = decide(&s, 0.3, 0.3, 0.10, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Call);

    // Обычные odds и заметный колл — fold.
    let s = spot(300, 200, 1000, &[ActionKind::Fold, ActionKind::Call]);
    let d = decide(&s, 0.3, 0.3, 0.4, &mut FixedRng(0.9));
    assert_eq!(d.kind, DecisionKind::Fold);
}

//
// ============= all-in на выживание =============
//

#[test]
fn survival_shove_requires_desperation_and_a_hand() {
    // Стек 30 при банке 600: короткий (< max(90, 100)) и отчаянный (< 40).
    let s = spot(600, 200, 30, &[ActionKind::Fold, ActionKind::AllIn]);

    // Рука нетривиальна (strength > 0.60) — шовим.
    let d = decide(&s, 0.1, 0.65, 0.25, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::AllIn);

    // Та же ситуация, но рука мусорная — fold.
    let d = decide(&s, 0.1, 0.2, 0.25, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::Fold);
}

#[test]
fn short_but_not_desperate_stack_does_not_shove() {
    // Стек 80 < 100 — короткий, но 80 >= 600/15 = 40 — ещё не отчаяние.
    let s = spot(600, 200, 80, &[ActionKind::Fold, ActionKind::AllIn]);
    let d = decide(&s, 0.1, 0.65, 0.25, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::Fold);
}

#[test]
fn deep_stack_never_shoves_a_weak_hand() {
    let s = spot(600, 200, 5000, &[ActionKind::Fold, ActionKind::AllIn]);
    let d = decide(&s, 0.45, 0.65, 0.25, &mut FixedRng(0.5));
    assert_eq!(d.kind, DecisionKind::Fold);
}
