//! Recursive and iterative Fibonacci under instrumentation.

#![cfg(feature = "profiling")]

use calltally_profiler::{profile_scope, Profiler};

fn fibonacci_rec(profiler: &Profiler, n: u64) -> u64 {
    profile_scope!(profiler);
    if n <= 1 {
        1
    } else {
        fibonacci_rec(profiler, n - 1) + fibonacci_rec(profiler, n - 2)
    }
}

fn fibonacci_it(profiler: &Profiler, n: u64) -> u64 {
    profile_scope!(profiler);
    let (mut a, mut b) = (1_u64, 1_u64);
    for _ in 1..n {
        let tmp = b;
        b = a;
        a += tmp;
    }
    a
}

#[test]
fn recursive_calls_are_counted_per_invocation() {
    let profiler = Profiler::new();

    assert_eq!(fibonacci_rec(&profiler, 10), 89);
    assert_eq!(fibonacci_it(&profiler, 10), 89);

    let registry = profiler.snapshot();
    assert_eq!(registry.len(), 2);

    let entries: Vec<_> = registry
        .iter()
        .map(|(key, stats)| (key.function.as_ref(), stats.count()))
        .collect();
    assert_eq!(entries, [("fibonacci_rec", 177), ("fibonacci_it", 1)]);
    assert_eq!(profiler.depth(), 0);
}

#[test]
fn recursive_self_time_never_exceeds_inclusive_time() {
    let profiler = Profiler::new();
    fibonacci_rec(&profiler, 15);

    let registry = profiler.snapshot();
    let (_, stats) = registry.iter().next().unwrap();

    // The outermost call encloses every other one, so the summed self time
    // of all recursive calls fits within the longest inclusive time.
    assert!(stats.acc_time() <= stats.max_time().unwrap());
    assert!(stats.min_time().unwrap() <= stats.max_time().unwrap());
}

#[test]
fn report_lists_both_functions() {
    let profiler = Profiler::new();
    fibonacci_rec(&profiler, 10);
    fibonacci_it(&profiler, 10);

    let mut out = Vec::new();
    profiler.render(&mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(first[0], "177");
    assert_eq!(first[4], "fibonacci_rec");
    assert!(first[5].starts_with(file!()));

    let second: Vec<&str> = lines[1].split_whitespace().collect();
    assert_eq!(second[0], "1");
    assert_eq!(second[4], "fibonacci_it");
}
