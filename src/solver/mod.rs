//! 求解器家族：四种策略共享同一可观测契约。
//!
//! 任一策略对同一输入必须返回同一长度，这是本引擎的核心正确性约定，
//! 由 [`agreement`] 模块与集成测试共同把守。

pub mod agreement;
pub mod brute;
pub mod hashing;
pub mod rows;
pub mod strategy;
pub mod table;

pub use agreement::{AgreementError, cross_check, random_sweep};
pub use hashing::has_common_run;
pub use strategy::{ParseStrategyError, Strategy};
pub use table::Grid;

/// 序列元素类型。题面约束为 `0..=100`，这里不做硬校验。
pub type Value = u32;
