use anyhow::{Context, anyhow, bail};
use log::{debug, info};

use repseq::io::{self, JobFile};
use repseq::options::{Options, RunMode};
use repseq::report::RunReport;
use repseq::solver::{Value, random_sweep};

fn main() -> anyhow::Result<()> {
    if std::env::var("REPSEQ_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("REPSEQ_LOG")
            .write_style("REPSEQ_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = if args.is_empty() {
        // 无命令行参数时退回 REPSEQ_FLAGS 环境变量
        Options::parse_from_str(&std::env::var("REPSEQ_FLAGS").unwrap_or_default())
    } else {
        Options::parse_from_args(&args)
    }
    .map_err(|e| anyhow!(e.to_string()))?;

    debug!("repseq options: {:?}", options);

    match options.mode {
        RunMode::SelfCheck { cases } => {
            let mut rng = rand::rng();
            let passed =
                random_sweep(&mut rng, cases, 200, 100).context("strategy cross-check failed")?;
            println!("selfcheck: {} random cases, all strategies agree", passed);
        }
        RunMode::Solve => {
            let (a, b) = load_sequences(&options)?;
            let report = RunReport::collect(&a, &b, &options.strategies);
            print!("{}", report);
            if !report.consistent() {
                bail!("strategies disagree, see {}", options.output);
            }
            report
                .save_to_file(&options.output)
                .with_context(|| format!("cannot write report to {}", options.output))?;
            info!("report written to {}", options.output);
        }
    }
    Ok(())
}

fn load_sequences(options: &Options) -> anyhow::Result<(Vec<Value>, Vec<Value>)> {
    if let (Some(a), Some(b)) = (&options.nums1, &options.nums2) {
        return Ok((a.clone(), b.clone()));
    }
    let path = options
        .input
        .as_deref()
        .ok_or_else(|| anyhow!("no input: pass --nums1/--nums2 or --input FILE"))?;
    let job: JobFile = if path.ends_with(".ron") {
        io::read_ron(path)
    } else {
        io::read_json(path)
    }
    .with_context(|| format!("cannot read job file {}", path))?;
    Ok((job.nums1, job.nums2))
}
