//! The two measured implementations.

use calltally_profiler::{profile_scope, Profiler};

/// Naive recursion; makes `2 * fib(n) - 1` calls.
pub fn fibonacci_rec(profiler: &Profiler, n: u64) -> u64 {
    profile_scope!(profiler);
    if n <= 1 {
        1
    } else {
        fibonacci_rec(profiler, n - 1) + fibonacci_rec(profiler, n - 2)
    }
}

pub fn fibonacci_it(profiler: &Profiler, n: u64) -> u64 {
    profile_scope!(profiler);
    let (mut a, mut b) = (1_u64, 1_u64);
    for _ in 1..n {
        let tmp = b;
        b = a;
        a = a.wrapping_add(tmp);
    }
    a
}
