/*
 The ruins monument:

   _ + _ * _^2 + _^3 - _ = 399

 red coin (2), corroded coin (3), shiny coin (5), concave coin (7), blue coin (9)
*/

use std::convert::TryFrom;
use itertools::Itertools;
use log::{debug, trace};
use num_enum::TryFromPrimitive;

use crate::error::{PuzzleError, Result};

pub const COINS: [i64; 5] = [2, 3, 5, 7, 9];
pub const TARGET: i64 = 399;

#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Coin {
    Red = 2,
    Corroded = 3,
    Shiny = 5,
    Concave = 7,
    Blue = 9,
}

impl Coin {
    pub fn value(self) -> i64 {
        self as u8 as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            Coin::Red => "red coin",
            Coin::Corroded => "corroded coin",
            Coin::Shiny => "shiny coin",
            Coin::Concave => "concave coin",
            Coin::Blue => "blue coin",
        }
    }

    pub fn from_value(value: i64) -> Result<Coin> {
        u8::try_from(value).ok()
            .and_then(|v| Coin::try_from(v).ok())
            .ok_or(PuzzleError::UnknownCoin(value))
    }
}

/// Left-hand side of the monument equation for one placement of the coins.
pub fn monument(p: &[i64]) -> Result<i64> {
    let (a, b, c, d, e) = match p {
        [a, b, c, d, e] => (*a, *b, *c, *d, *e),
        _ => return Err(PuzzleError::CoinCount(p.len())),
    };
    let overflow = || PuzzleError::Overflow("monument");
    let bc2 = c.checked_pow(2).and_then(|c2| b.checked_mul(c2)).ok_or_else(overflow)?;
    let d3 = d.checked_pow(3).ok_or_else(overflow)?;
    a.checked_add(bc2)
        .and_then(|s| s.checked_add(d3))
        .and_then(|s| s.checked_sub(e))
        .ok_or_else(overflow)
}

/// First ordering of `values`, in the order `permutations` yields them, that
/// makes the monument come to `target`.
pub fn find_arrangement(values: &[i64], target: i64) -> Result<Vec<i64>> {
    if values.len() != 5 {
        return Err(PuzzleError::CoinCount(values.len()));
    }
    for (i, perm) in values.iter().copied().permutations(5).enumerate() {
        let total = monument(&perm)?;
        trace!("{:?} -> {}", perm, total);
        if total == target {
            debug!("matched after {} permutations", i + 1);
            return Ok(perm);
        }
    }
    Err(PuzzleError::NoSolution { target })
}

pub fn solve() -> Result<Vec<Coin>> {
    find_arrangement(&COINS, TARGET)?
        .into_iter()
        .map(Coin::from_value)
        .collect()
}
