//! Ядро покерного бота: оценка рук, Monte Carlo симуляция эквити и
//! политика принятия решений.
//!
//! Сетевой транспорт (HTTP+JSON polling), консольный вывод и точка входа
//! процесса — внешние коллабораторы. Здесь моделируем только их границу:
//! входной снапшот игры (`api::GameSnapshot`) и исходящее действие
//! (`api::ActionRequest`). Всё остальное — чистые вычисления над
//! значениями в памяти, без общего изменяемого состояния.

pub mod api;
pub mod bot;
pub mod domain;
pub mod eval;
pub mod infra;
pub mod strategy;

pub use api::{ActionRequest, GameSnapshot};
pub use bot::{make_decision, BotError};
pub use strategy::policy::{ActionKind, Decision, DecisionKind};
pub use strategy::RandomSource;
