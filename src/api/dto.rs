use serde::{Deserialize, Serialize};

use crate::domain::street::Street;
use crate::strategy::policy::{ActionKind, Decision};

/// Снапшот состояния игры, который транспорт получает на каждом polle.
/// Читается ядром строго read-only; имена полей — как на проводе.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub game_id: Option<String>,

    /// Фаза раздачи в текстовом виде: "preflop", "flop", "turn", "river".
    #[serde(default)]
    pub phase: String,

    #[serde(default)]
    pub pot: u64,

    /// Сумма, которую нужно уравнять.
    #[serde(default)]
    pub current_bet: u64,

    #[serde(default)]
    pub community_cards: Vec<String>,

    #[serde(default)]
    pub current_player_id: Option<String>,

    #[serde(default)]
    pub your_player_id: Option<String>,

    #[serde(default)]
    pub your_chips: u64,

    /// Свои карманные карты: 0 или 2 токена.
    #[serde(default)]
    pub your_cards: Vec<String>,

    #[serde(default)]
    pub valid_actions: Vec<ActionKind>,

    #[serde(default)]
    pub players: Vec<PlayerInfo>,
}

impl GameSnapshot {
    pub fn is_my_turn(&self) -> bool {
        match (&self.current_player_id, &self.your_player_id) {
            (Some(current), Some(our)) => current == our,
            _ => false,
        }
    }

    pub fn street(&self) -> Street {
        Street::from_phase(&self.phase, self.community_cards.len())
    }
}

/// Информация об игроке за столом (в том числе о нас самих).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub chips: u64,

    #[serde(default)]
    pub current_bet: u64,

    /// Статус в текстовом виде; сфолдившие приходят как "Folded".
    #[serde(default)]
    pub status: String,
}

/// Исходящее действие в формате транспорта:
/// `{"type": "raise", "amount": 120}` — amount только у рейза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionRequest {
    #[serde(rename = "type")]
    pub kind: ActionKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl From<&Decision> for ActionRequest {
    fn from(decision: &Decision) -> Self {
        ActionRequest {
            kind: decision.kind.action_kind(),
            amount: decision.kind.amount().map(|chips| chips.0),
        }
    }
}
