use core::ops::Add;

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над u64, чтобы не путать с обычными числами.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Chips(pub u64);

impl Chips {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}
