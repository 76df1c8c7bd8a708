//! 策略选择：四种算法以枚举形式暴露，调用方按资源约束取舍.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::solver::{Value, brute, hashing, rows, table};

/// 可选求解策略。四者对任意输入返回完全相同的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// 暴力枚举，`O(n·m·min(n,m))` 时间
    BruteForce,
    /// 全表 DP，`O(n·m)` 空间，参照实现
    Table,
    /// 双行滚动 DP，生产路径默认
    Rows,
    /// 滚动哈希 + 二分
    Hashing,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BruteForce,
        Strategy::Table,
        Strategy::Rows,
        Strategy::Hashing,
    ];

    /// CLI 与配置中使用的短名。
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute",
            Strategy::Table => "table",
            Strategy::Rows => "rows",
            Strategy::Hashing => "hash",
        }
    }

    pub fn find_length(self, a: &[Value], b: &[Value]) -> usize {
        match self {
            Strategy::BruteForce => brute::find_length(a, b),
            Strategy::Table => table::find_length(a, b),
            Strategy::Rows => rows::find_length(a, b),
            Strategy::Hashing => hashing::find_length(a, b),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown strategy `{0}`, expected one of brute/table/rows/hash")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute" => Ok(Strategy::BruteForce),
            "table" => Ok(Strategy::Table),
            "rows" => Ok(Strategy::Rows),
            "hash" => Ok(Strategy::Hashing),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
