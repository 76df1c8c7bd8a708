//! 暴力枚举求解器：逐对起点向前扫描公共前缀.
use log::trace;

use crate::solver::Value;

/// 返回 `a` 与 `b` 的最长公共连续子数组长度；任一输入为空时为 0。
///
/// 对 `a` 的每个起点 `i` 与 `b` 的每个起点 `j`，向前走到首个失配处，
/// 取所有 `(i, j)` 对中的最长公共前缀。
pub fn find_length(a: &[Value], b: &[Value]) -> usize {
    let mut best = 0;
    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut len = 0;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            if len > best {
                trace!("brute: new best {} at (i={}, j={})", len, i, j);
                best = len;
            }
        }
    }
    best
}
