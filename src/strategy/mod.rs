//! Стратегия бота: сигналы силы руки и политика принятия решений.
//!
//! Конвейер: {префлоп-таблица | классификатор + Monte Carlo} →
//! pot odds → `policy::decide`.

pub mod montecarlo;
pub mod outs;
pub mod policy;
pub mod pot_odds;
pub mod preflop;

pub use montecarlo::{sample_count, simulate};
pub use outs::estimate_outs;
pub use policy::{decide, ActionKind, Decision, DecisionKind, DecisionPoint};
pub use pot_odds::{calculate_pot_odds, is_call_profitable};
pub use preflop::estimate_preflop_strength;

/// RNG-интерфейс для симулятора и рандомизированных веток политики.
/// Передаётся явно, чтобы в тестах подставлять детерминированный
/// источник и дотягиваться до конкретных веток.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайное число в [0, 1).
    fn next_f64(&mut self) -> f64;
}
