//! 四种策略的一致性与题面性质的集成测试.
use rand::Rng;

use repseq::solver::{Strategy, Value, cross_check, has_common_run};

/// 题面与原始测试表中的种子用例。
const SEED_CASES: &[(&[Value], &[Value], usize)] = &[
    (&[1, 2, 3, 2, 1], &[3, 2, 1, 4, 7], 3),
    (&[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0], 5),
    (&[1, 2, 3], &[4, 5, 6], 0),
    (&[], &[1, 2, 3], 0),
    (&[1, 2, 3], &[], 0),
    (&[], &[], 0),
    (&[1], &[1], 1),
    (&[1], &[2], 0),
    (&[1, 0, 1, 0, 1], &[1, 1, 1, 1, 1], 1),
    (&[0, 1, 1, 1, 1], &[1, 0, 1, 0, 1], 2),
    (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5], 5),
    (&[1, 2, 3, 4, 5], &[1, 2, 3, 6, 7], 3),
    (&[1, 2, 3, 4, 5], &[6, 7, 3, 4, 5], 3),
    (&[1, 2, 3, 4, 5], &[6, 2, 3, 4, 7], 3),
    (&[1, 2, 1, 2, 3], &[2, 1, 2, 3, 4], 4),
    (&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &[3, 4, 5], 3),
];

fn random_sequence<R: Rng>(rng: &mut R, max_len: usize) -> Vec<Value> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(0..=8)).collect()
}

#[test]
fn every_strategy_matches_seed_expectations() {
    for &(a, b, expected) in SEED_CASES {
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.find_length(a, b),
                expected,
                "{} on a={:?} b={:?}",
                strategy,
                a,
                b
            );
        }
    }
}

#[test]
fn cross_check_accepts_seed_cases() {
    for &(a, b, expected) in SEED_CASES {
        assert_eq!(cross_check(a, b).unwrap(), expected);
    }
}

#[test]
fn strategies_agree_on_random_inputs() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let a = random_sequence(&mut rng, 60);
        let b = random_sequence(&mut rng, 60);
        cross_check(&a, &b).unwrap();
    }
}

#[test]
fn result_is_symmetric() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_sequence(&mut rng, 40);
        let b = random_sequence(&mut rng, 40);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.find_length(&a, &b), strategy.find_length(&b, &a));
        }
    }
}

#[test]
fn result_is_bounded_by_shorter_input() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_sequence(&mut rng, 50);
        let b = random_sequence(&mut rng, 50);
        let len = cross_check(&a, &b).unwrap();
        assert!(len <= a.len().min(b.len()));
    }
}

#[test]
fn identical_inputs_match_in_full() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let a = random_sequence(&mut rng, 80);
        assert_eq!(cross_check(&a, &a).unwrap(), a.len());
    }

    let patterned: Vec<Value> = (0..100).map(|i| i % 10).collect();
    assert_eq!(cross_check(&patterned, &patterned).unwrap(), 100);
}

#[test]
fn existence_predicate_is_monotone() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let a = random_sequence(&mut rng, 40);
        let b = random_sequence(&mut rng, 40);
        let longest = cross_check(&a, &b).unwrap();
        for len in 0..=longest {
            assert!(has_common_run(&a, &b, len));
        }
        for len in longest + 1..=a.len().min(b.len()) {
            assert!(!has_common_run(&a, &b, len));
        }
    }
}

#[test]
fn shifted_pattern_inputs_agree() {
    // 原始测试中的错位周期模式
    for size in [10usize, 50, 100] {
        let a: Vec<Value> = (0..size as Value).map(|i| i % 5).collect();
        let b: Vec<Value> = (0..size as Value).map(|i| (i + 2) % 5).collect();
        cross_check(&a, &b).unwrap();
    }
}

#[test]
fn large_disjoint_inputs_yield_zero() {
    let a = vec![1; 1000];
    let b = vec![2; 1000];
    for strategy in Strategy::ALL {
        assert_eq!(strategy.find_length(&a, &b), 0);
    }
}
