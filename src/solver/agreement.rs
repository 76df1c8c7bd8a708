//! 多策略交叉校验：同一输入下四种策略必须给出同一答案.
use log::{info, warn};
use rand::Rng;
use thiserror::Error;

use crate::solver::{Strategy, Value};

/// 各策略答案不一致时的诊断信息，逐策略列出求得的长度。
#[derive(Debug, Error)]
#[error("strategies disagree: {findings:?}")]
pub struct AgreementError {
    pub findings: Vec<(Strategy, usize)>,
}

/// 以全部策略求解同一输入；一致时返回公共答案。
pub fn cross_check(a: &[Value], b: &[Value]) -> Result<usize, AgreementError> {
    let findings: Vec<(Strategy, usize)> = Strategy::ALL
        .iter()
        .map(|&s| (s, s.find_length(a, b)))
        .collect();

    let first = findings[0].1;
    if findings.iter().all(|&(_, len)| len == first) {
        Ok(first)
    } else {
        warn!("cross check failed: {:?}", findings);
        Err(AgreementError { findings })
    }
}

/// 随机生成 `cases` 组序列并逐一交叉校验，全部通过时返回校验组数。
pub fn random_sweep<R: Rng>(
    rng: &mut R,
    cases: usize,
    max_len: usize,
    max_value: Value,
) -> Result<usize, AgreementError> {
    for round in 0..cases {
        let a = random_sequence(rng, max_len, max_value);
        let b = random_sequence(rng, max_len, max_value);
        let len = cross_check(&a, &b)?;
        info!(
            "sweep round {}: |a|={} |b|={} -> {}",
            round,
            a.len(),
            b.len(),
            len
        );
    }
    Ok(cases)
}

fn random_sequence<R: Rng>(rng: &mut R, max_len: usize, max_value: Value) -> Vec<Value> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(0..=max_value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_cases_agree() {
        assert_eq!(cross_check(&[1, 2, 3, 2, 1], &[3, 2, 1, 4, 7]).unwrap(), 3);
        assert_eq!(cross_check(&[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0]).unwrap(), 5);
        assert_eq!(cross_check(&[1, 2, 3], &[4, 5, 6]).unwrap(), 0);
        assert_eq!(cross_check(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn random_sweep_passes() {
        let mut rng = rand::rng();
        assert_eq!(random_sweep(&mut rng, 40, 30, 10).unwrap(), 40);
    }
}
