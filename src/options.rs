//! Parsing Options.
//! `--strategy {name}` or `-s`, one of brute/table/rows/hash/all

use clap::{Arg, Command};
use std::error::Error;

use crate::solver::{Strategy, Value};

/// 运行模式：求解给定输入，或对随机输入做多策略交叉校验。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Solve,
    SelfCheck { cases: usize },
}

fn make_options_parser() -> clap::Command {
    Command::new("repseq")
        .no_binary_name(true)
        .version("v0.1.0")
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("The solver strategy")
                .default_value("all")
                .value_parser(["brute", "table", "rows", "hash", "all"]),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Job file holding nums1/nums2 (.json or .ron)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the run report will be stored")
                .default_value("report.json"), // 默认的报告路径
        )
        .arg(
            Arg::new("nums1")
                .long("nums1")
                .value_name("LIST")
                .help("First sequence, comma separated, e.g. 1,2,3,2,1"),
        )
        .arg(
            Arg::new("nums2")
                .long("nums2")
                .value_name("LIST")
                .help("Second sequence, comma separated"),
        )
        .arg(
            Arg::new("selfcheck")
                .long("selfcheck")
                .value_name("N")
                .help("Cross-check all strategies on N random sequence pairs"),
        )
}

#[derive(Debug)]
pub struct Options {
    pub strategies: Vec<Strategy>,
    pub input: Option<String>,
    pub output: String,
    pub nums1: Option<Vec<Value>>,
    pub nums2: Option<Vec<Value>>,
    pub mode: RunMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            strategies: Strategy::ALL.to_vec(),
            input: None,
            output: "report.json".to_string(),
            nums1: None,
            nums2: None,
            mode: RunMode::Solve,
        }
    }
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let strategies = match matches.get_one::<String>("strategy").map(String::as_str) {
            Some("all") | None => Strategy::ALL.to_vec(),
            Some(name) => vec![name.parse::<Strategy>()?],
        };

        let input = matches.get_one::<String>("input").cloned();
        let output = matches.get_one::<String>("output").unwrap().to_string();

        let nums1 = matches
            .get_one::<String>("nums1")
            .map(|s| parse_sequence(s))
            .transpose()?;
        let nums2 = matches
            .get_one::<String>("nums2")
            .map(|s| parse_sequence(s))
            .transpose()?;

        let mode = match matches.get_one::<String>("selfcheck") {
            Some(n) => RunMode::SelfCheck {
                cases: n.parse::<usize>()?,
            },
            None => RunMode::Solve,
        };

        Ok(Options {
            strategies,
            input,
            output,
            nums1,
            nums2,
            mode,
        })
    }
}

/// 解析逗号分隔的序列字面量；空串视为空序列。
pub fn parse_sequence(s: &str) -> Result<Vec<Value>, Box<dyn Error>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|item| Ok(item.trim().parse::<Value>()?))
        .collect()
}
