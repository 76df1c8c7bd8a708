//! 全表动态规划求解器及其扁平化 DP 表.
use std::fmt;

use crate::solver::Value;

/// 行优先扁平存储的 `rows × cols` 非负整数网格，`get(i, j)` 对应教科书
/// 写法中的 `t[i][j]`。每次求解新建一张表，调用结束即丢弃。
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u32>,
    cols: usize,
}

impl Grid {
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0; rows * cols],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.cells.len() / self.cols
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        debug_assert!(
            col < self.cols,
            "column {} out of bounds for grid with {} columns",
            col,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(
            col < self.cols,
            "column {} out of bounds for grid with {} columns",
            col,
            self.cols
        );
        self.cells[row * self.cols + col] = value;
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows(), self.cols)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "  {:?}", row)?;
        }
        Ok(())
    }
}

/// 全表 DP：`t[i][j] = t[i-1][j-1] + 1`（当 `a[i-1] == b[j-1]`），否则为 0；
/// 答案为表中最大值。第 0 行与第 0 列为哨兵，恒为 0。
///
/// `O(n·m)` 时间与空间。生产路径建议使用 [`crate::solver::rows`]，
/// 本实现保留为参照与测试基准。
pub fn find_length(a: &[Value], b: &[Value]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut table = Grid::zeroed(a.len() + 1, b.len() + 1);
    let mut best = 0u32;
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                let run = table.get(i - 1, j - 1) + 1;
                table.set(i, j, run);
                if run > best {
                    best = run;
                }
            }
        }
    }
    best as usize
}
