//! 双行滚动 DP：与全表递推一致，仅保留上一行与当前行.
use std::mem;

use crate::solver::Value;

/// 与 [`crate::solver::table::find_length`] 输出一致，空间降为
/// `O(min(n, m))`。较短序列固定为列维，保留行长度为 `min(n, m) + 1`。
///
/// 不变式：处理完行维第 `i` 个元素后，`curr` 与全表第 `i` 行逐位相同
/// （`curr[0]` 为哨兵，恒为 0，且内层循环覆写其余所有格）。
pub fn find_length(a: &[Value], b: &[Value]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (outer, inner) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let mut prev = vec![0u32; inner.len() + 1];
    let mut curr = vec![0u32; inner.len() + 1];
    let mut best = 0u32;

    for &x in outer {
        for (j, &y) in inner.iter().enumerate() {
            let run = if x == y { prev[j] + 1 } else { 0 };
            curr[j + 1] = run;
            if run > best {
                best = run;
            }
        }
        mem::swap(&mut prev, &mut curr);
    }
    best as usize
}
