//! 运行报告：逐策略记录求得长度与耗时，可保存为 JSON / RON.
use std::fmt;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::io::{self, IoError};
use crate::solver::{Strategy, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: String, // 策略短名，见 `Strategy::name`
    pub length: usize,    // 求得的最长公共连续子数组长度
    pub elapsed_us: u64,  // 该策略耗时（微秒）
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub len_a: usize,
    pub len_b: usize,
    pub outcomes: Vec<StrategyOutcome>,
}

impl RunReport {
    /// 依次运行给定策略并计时。
    pub fn collect(a: &[Value], b: &[Value], strategies: &[Strategy]) -> Self {
        let outcomes = strategies
            .iter()
            .map(|&strategy| {
                let started = Instant::now();
                let length = strategy.find_length(a, b);
                let elapsed_us = started.elapsed().as_micros() as u64;
                debug!("{}: length={} elapsed={}us", strategy, length, elapsed_us);
                StrategyOutcome {
                    strategy: strategy.name().to_string(),
                    length,
                    elapsed_us,
                }
            })
            .collect();
        RunReport {
            len_a: a.len(),
            len_b: b.len(),
            outcomes,
        }
    }

    /// 所有策略是否给出同一长度。
    pub fn consistent(&self) -> bool {
        self.outcomes
            .windows(2)
            .all(|pair| pair[0].length == pair[1].length)
    }

    /// 按扩展名选择 RON 或 JSON 落盘。
    pub fn save_to_file(&self, path: &str) -> Result<(), IoError> {
        if path.ends_with(".ron") {
            io::write_ron(path, self)
        } else {
            io::write_json(path, self)
        }
    }
}

impl fmt::Display for StrategyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} length={} ({}us)",
            self.strategy, self.length, self.elapsed_us
        )
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Repeated-Subarray Report (|a|={}, |b|={})",
            self.len_a, self.len_b
        )?;
        for outcome in &self.outcomes {
            writeln!(f, "  {}", outcome)?;
        }
        Ok(())
    }
}
