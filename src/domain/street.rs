use serde::{Deserialize, Serialize};

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Улица из текстовой фазы транспорта ("flop", "turn", "river").
    /// Незнакомую фазу уточняем по числу открытых общих карт.
    pub fn from_phase(phase: &str, board_len: usize) -> Street {
        match phase.to_ascii_lowercase().as_str() {
            "preflop" | "pre-flop" => Street::Preflop,
            "flop" => Street::Flop,
            "turn" => Street::Turn,
            "river" => Street::River,
            _ => match board_len {
                3 => Street::Flop,
                4 => Street::Turn,
                5 => Street::River,
                _ => Street::Preflop,
            },
        }
    }
}
