/// Явный индексный генератор 5-карточных сочетаний.
///
/// Вместо рекурсивного построения списков идём по сочетаниям индексов
/// в лексикографическом порядке, без аллокаций на шаг. Инвариант:
/// ровно C(n,5) различных сочетаний (21 для n=7, 6 для n=6, 1 для n=5).
pub struct FiveCardCombos {
    n: usize,
    idx: [usize; 5],
    done: bool,
}

/// Итератор по всем сочетаниям 5 индексов из `0..n`. Для n < 5 пуст.
pub fn five_card_combos(n: usize) -> FiveCardCombos {
    FiveCardCombos {
        n,
        idx: [0, 1, 2, 3, 4],
        done: n < 5,
    }
}

impl Iterator for FiveCardCombos {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<[usize; 5]> {
        if self.done {
            return None;
        }
        let current = self.idx;

        // Следующее сочетание: ищем справа позицию, которую ещё можно
        // увеличить, и «перезапускаем» хвост за ней.
        let mut i = 4usize;
        loop {
            if self.idx[i] < self.n - (5 - i) {
                self.idx[i] += 1;
                for j in (i + 1)..5 {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(current)
    }
}
