//! 滚动哈希 + 二分求解器.
//!
//! 利用单调性：若存在长度 `L` 的公共连续子数组，则其任意前缀给出所有
//! 更短长度的公共连续子数组。据此对候选长度二分，存在性谓词用多项式
//! 滚动哈希在 `O(n + m)` 内判定。
use std::collections::HashMap;

use log::debug;

use crate::solver::Value;

const BASE: u64 = 101;
const MOD: u64 = 1_000_000_007;

/// 二分候选长度区间 `[0, min(n, m)]`，收敛到满足存在性谓词的最大值。
pub fn find_length(a: &[Value], b: &[Value]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut lo = 0usize;
    let mut hi = a.len().min(b.len());
    let mut best = 0;

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let found = has_common_run(a, b, mid);
        debug!("hash probe: len={} -> {}", mid, found);
        if found {
            best = mid;
            lo = mid + 1;
        } else {
            // mid >= 1，谓词对 0 恒为真
            hi = mid - 1;
        }
    }
    best
}

/// 判断是否存在长度恰为 `len` 的公共连续子数组。
///
/// `len == 0` 为空窗口，恒为真；`len` 超过任一序列长度时为假。
/// 先收集 `a` 中每个窗口的哈希及其起点，再滚动扫描 `b`；哈希命中后
/// 按元素直接比对复核，杜绝碰撞误报。
pub fn has_common_run(a: &[Value], b: &[Value], len: usize) -> bool {
    if len == 0 {
        return true;
    }
    if len > a.len() || len > b.len() {
        return false;
    }

    // base^(len-1) mod p，滑出窗口最左元素时使用
    let mut top = 1u64;
    for _ in 0..len - 1 {
        top = top * BASE % MOD;
    }

    let mut starts: HashMap<u64, Vec<usize>> = HashMap::new();
    let mut hash = 0u64;
    for (i, &x) in a.iter().enumerate() {
        hash = (hash * BASE + u64::from(x)) % MOD;
        if i + 1 >= len {
            let start = i + 1 - len;
            starts.entry(hash).or_default().push(start);
            hash = (hash + MOD - u64::from(a[start]) * top % MOD) % MOD;
        }
    }

    let mut hash = 0u64;
    for (j, &y) in b.iter().enumerate() {
        hash = (hash * BASE + u64::from(y)) % MOD;
        if j + 1 >= len {
            let start = j + 1 - len;
            if let Some(candidates) = starts.get(&hash) {
                let window = &b[start..start + len];
                if candidates.iter().any(|&i| &a[i..i + len] == window) {
                    return true;
                }
            }
            hash = (hash + MOD - u64::from(b[start]) * top % MOD) % MOD;
        }
    }
    false
}
