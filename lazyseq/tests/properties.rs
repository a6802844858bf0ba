mod common;

use lazyseq::{all, filter, head, init, last, map, reduce, tail};
use proptest::prelude::*;

use common::SinglePass;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..64)
}

fn non_empty_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 1..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn head_then_tail_rebuilds(s in non_empty_vec()) {
        let rebuilt: Vec<_> = head(s.clone()).chain(tail(s.clone())).collect();
        prop_assert_eq!(rebuilt, s);
    }

    #[test]
    fn init_then_last_rebuilds(s in non_empty_vec()) {
        let rebuilt: Vec<_> = init(s.clone()).chain(last(s.clone())).collect();
        prop_assert_eq!(rebuilt, s);
    }

    #[test]
    fn map_preserves_order(s in small_vec()) {
        let mapped: Vec<_> = map(|x| i64::from(x) * 3, s.clone()).collect();
        let expected: Vec<_> = s.iter().map(|x| i64::from(*x) * 3).collect();
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn filter_preserves_order(s in small_vec(), m in 1i32..7) {
        let filtered: Vec<_> = filter(|x| x % m == 0, s.clone()).collect();
        let expected: Vec<_> = s.into_iter().filter(|x| x % m == 0).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn reduce_is_running_fold(s in small_vec()) {
        let running: Vec<i64> = reduce(|a, b| a + b, s.iter().map(|x| i64::from(*x))).collect();
        let mut expected = Vec::new();
        let mut sum = s.first().map(|x| i64::from(*x)).unwrap_or_default();
        for x in s.iter().skip(1) {
            sum += i64::from(*x);
            expected.push(sum);
        }
        prop_assert_eq!(running, expected);
    }

    #[test]
    fn reduce_single_pass_matches_vec(s in small_vec()) {
        let source = SinglePass::new(s.clone());
        let single_pass: Vec<_> = reduce(|a, b| a.max(b), &source).collect();
        let from_vec: Vec<_> = reduce(|a, b| a.max(b), s).collect();
        prop_assert_eq!(single_pass, from_vec);
        prop_assert_eq!(source.traversals(), 1);
    }

    #[test]
    fn all_is_prefix_conjunction(s in small_vec()) {
        let outputs: Vec<_> = all(s.clone(), |x| x >= 0).collect();
        prop_assert_eq!(outputs.len(), s.len());
        for (i, output) in outputs.iter().enumerate() {
            prop_assert_eq!(*output, s[..=i].iter().all(|x| *x >= 0));
        }
    }

    #[test]
    fn lengths(s in small_vec()) {
        let n = s.len();
        prop_assert_eq!(head(s.clone()).count(), n.min(1));
        prop_assert_eq!(tail(s.clone()).count(), n.saturating_sub(1));
        prop_assert_eq!(init(s.clone()).count(), n.saturating_sub(1));
        prop_assert_eq!(last(s.clone()).count(), n.min(1));
        prop_assert_eq!(reduce(|a, b| a ^ b, s).count(), n.saturating_sub(1));
    }
}
