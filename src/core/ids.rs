pub type NodeId = u32;

/// Number of unordered vertex pairs, `n * (n - 1) / 2`.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count() {
        assert_eq!(0, pair_count(0));
        assert_eq!(0, pair_count(1));
        assert_eq!(1, pair_count(2));
        assert_eq!(10, pair_count(5));
        assert_eq!(4950, pair_count(100));
    }
}
