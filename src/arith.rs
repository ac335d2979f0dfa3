//! Arithmetic helpers stepped into by the entry routine.
//!
//! Both helpers stay out of line so a debugger can break on them by name.

/// Returns `a + b`, wrapping on overflow.
#[inline(never)]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns `a * b`, wrapping on overflow.
#[inline(never)]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [i32; 9] = [i32::MIN, -65_536, -7, -1, 0, 1, 5, 10, i32::MAX];

    #[test]
    fn sample_inputs() {
        assert_eq!(add(5, 10), 15);
        assert_eq!(multiply(5, 10), 50);
    }

    #[test]
    fn commutative() {
        for &a in &VALUES {
            for &b in &VALUES {
                assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
                assert_eq!(multiply(a, b), multiply(b, a), "multiply({a}, {b})");
            }
        }
    }

    #[test]
    fn identity_elements() {
        for &a in &VALUES {
            assert_eq!(add(a, 0), a);
            assert_eq!(multiply(a, 1), a);
        }
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(multiply(i32::MAX, 2), -2);
        assert_eq!(multiply(i32::MIN, -1), i32::MIN);
    }
}
