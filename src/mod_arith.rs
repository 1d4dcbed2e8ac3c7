use std::ops::Rem;
use num::{CheckedAdd, One};

/// Size of the 15-bit value space the teleporter check works in.
pub const MODULUS: u32 = 32768;

pub fn mod_add<T>(a: T, b: T, m: T) -> Option<T>
    where T: CheckedAdd + Rem<Output = T> + Copy
{
    a.checked_add(&b).map(|ab| ab % m)
}

/// `(a + 1) % m`
pub fn mod_inc<T>(a: T, m: T) -> Option<T>
    where T: CheckedAdd + Rem<Output = T> + One + Copy
{
    mod_add(a, T::one(), m)
}

/// Decrement with wraparound, written as `(a + (m - 1)) % m` so it never goes negative.
pub fn mod_dec<T>(a: T, m: T) -> Option<T>
    where T: CheckedAdd + Rem<Output = T> + One + Copy + std::ops::Sub<Output = T>
{
    mod_add(a, m - T::one(), m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inc_wraps_at_top() {
        assert_eq!(mod_inc(32767u32, MODULUS), Some(0));
        assert_eq!(mod_inc(41u32, MODULUS), Some(42));
    }

    #[test]
    fn dec_wraps_at_zero() {
        assert_eq!(mod_dec(0u32, MODULUS), Some(32767));
        assert_eq!(mod_dec(1u32, MODULUS), Some(0));
        assert_eq!(mod_dec(7u16, 32768u16), Some(6));
    }

    #[test]
    fn add_reports_overflow() {
        assert_eq!(mod_add(u16::max_value(), 1, 32768), None);
        assert_eq!(mod_add(32000u16, 1000, 32768), Some(232));
    }
}
