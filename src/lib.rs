//! # 最长公共连续子数组长度引擎
//!
//! 给定两个有界非负整数序列 `A ∈ V^n`、`B ∈ V^m`（题面约束 `V = {0,…,100}`，
//! `n, m ≤ 1000`），求最大的 `L` 使得存在 `i, j` 满足
//! `A[i..i+L] = B[j..j+L]`。空序列合法，结果定义为 0。
//!
//! 提供四种可互换的求解策略，输出逐位一致，仅复杂度与内存占用不同：
//!
//! * 暴力枚举：`O(n·m·min(n,m))` 时间、`O(1)` 额外空间；
//! * 全表动态规划：`t[i][j] = t[i-1][j-1] + 1`（当 `A[i-1] = B[j-1]`），
//!   否则为 0，`O(n·m)` 时间与空间；
//! * 双行滚动 DP：同一递推，仅保留上一行与当前行，`O(min(n,m))` 空间；
//! * 滚动哈希 + 二分：对候选长度二分，存在性谓词 `O(n+m)`，
//!   总计 `O((n+m)·log min(n,m))`。
//!
//! 所有求解器均为纯函数：无共享可变状态、无 I/O、无挂起点，可在不相交
//! 输入上任意并发调用。
//!
//! ## 示例
//!
//! ```rust
//! use repseq::solver::Strategy;
//!
//! let a = [1, 2, 3, 2, 1];
//! let b = [3, 2, 1, 4, 7];
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.find_length(&a, &b), 3);
//! }
//! ```

pub mod io;
pub mod options;
pub mod report;
pub mod solver;

pub use io::{IoError, JobFile};
pub use options::{Options, RunMode};
pub use report::RunReport;
pub use solver::{AgreementError, Strategy, Value, cross_check, has_common_run};
