use crate::domain::chips::Chips;

/// Pot odds: доля суммы колла в итоговом банке.
///
/// Нулевой колл определяем как 1.0 — деления на ноль не бывает
/// (в том числе при пустом банке).
pub fn calculate_pot_odds(pot: Chips, to_call: Chips) -> f64 {
    if to_call.is_zero() {
        return 1.0;
    }
    to_call.as_f64() / (pot + to_call).as_f64()
}

/// Колл выгоден, когда эквити строго превышает pot odds.
pub fn is_call_profitable(win_probability: f64, pot_odds: f64) -> bool {
    win_probability > pot_odds
}
