use crate::cards::hand::Hand;

/// binomial coefficients choose(n, k) for n in 0..=52 and k in 0..=5
const fn pascal() -> [[u32; 6]; 53] {
    let mut choose = [[0u32; 6]; 53];
    let mut n = 0;
    while n < 53 {
        choose[n][0] = 1;
        let mut k = 1;
        while k < 6 {
            choose[n][k] = if n == 0 {
                0
            } else {
                choose[n - 1][k - 1] + choose[n - 1][k]
            };
            k += 1;
        }
        n += 1;
    }
    choose
}

pub const CHOOSE: [[u32; 6]; 53] = pascal();

/// colexicographic rank of a five-card Hand
///
/// with cards c0 < c1 < .. < c4 as deck positions, the index is
/// sum of choose(ci, i + 1). this is a bijection between five-card
/// hands and [0, choose(52, 5)), and enumerating hands as ascending
/// bitstrings visits indices in ascending order.
pub fn index(hand: Hand) -> usize {
    debug_assert!(hand.size() == 5);
    hand.into_iter()
        .enumerate()
        .map(|(i, card)| CHOOSE[u8::from(card) as usize][i + 1])
        .sum::<u32>() as usize
}
