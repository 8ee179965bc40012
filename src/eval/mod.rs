//! Оценка покерных рук.
//!
//! Основные операции:
//!   - `evaluate_hand` – лучшая категория для 5–7 карт (перебор всех
//!     5-карточных подмножеств);
//!   - `hand_strength` – нормированная сила руки в [0,1].

pub mod combos;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use combos::five_card_combos;
pub use evaluator::{evaluate_hand, hand_strength};
pub use hand_rank::HandCategory;
