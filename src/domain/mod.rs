//! Доменная модель: карты, колода, фишки, улицы раздачи.

pub mod card;
pub mod chips;
pub mod deck;
pub mod street;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use street::*;
