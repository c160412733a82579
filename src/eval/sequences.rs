//! Integer sequences computed in f64, matching the reference arithmetic

/// Iterative Fibonacci: F(0)=0, F(1)=1, O(n) time and O(1) space
pub(crate) fn fibonacci(n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return 1.0;
    }
    let (mut a, mut b) = (0.0, 1.0);
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Sum of row `n` of Pascal's triangle
///
/// The row is built by construction from row 0 = [1], ends fixed at 1 and
/// interior entries summed from the row above. The sum equals 2^n, but the
/// reference computes it entry by entry, so we do too.
pub(crate) fn pascal_row_sum(n: u64) -> f64 {
    let mut row = vec![1.0_f64];
    for i in 1..=n {
        let mut next = vec![1.0; i as usize + 1];
        for j in 1..i as usize {
            next[j] = row[j - 1] + row[j];
        }
        row = next;
    }
    row.iter().sum()
}
