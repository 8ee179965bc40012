//! Граница с внешним транспортом: DTO снапшота игры (вход) и
//! действия (выход). Сам HTTP-клиент живёт снаружи ядра.

pub mod dto;

pub use dto::{ActionRequest, GameSnapshot, PlayerInfo};
