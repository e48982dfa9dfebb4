//! Runs the affine accumulation over the smoke-test base vectors and
//! prints each result the way numpy would.

use std::io::{self, Write};

use clap::Parser;
use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use thiserror::Error;

use seqaccum_math::{
    accumulate, accumulate_checked, accumulate_using,
    blas::{BLASContext, CpuContext},
    PrintOptions, Vector,
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Accumulate(#[from] seqaccum_math::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser)]
#[command(name = "seqaccum", author, version, about, long_about = None)]
struct Cli {
    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Number of `result = i * base + result` updates
    #[arg(long)]
    #[arg(default_value_t = 100)]
    iterations: usize,

    /// Characters per output line before wrapping
    #[arg(long)]
    #[arg(default_value_t = PrintOptions::default().linewidth)]
    linewidth: usize,

    /// Fail on integer overflow instead of wrapping
    #[arg(long)]
    #[arg(conflicts_with = "fused")]
    checked: bool,

    /// Update a single buffer with the BLAS axpy kernel
    #[arg(long)]
    fused: bool,

    /// Comma-separated base vectors, e.g. `1,2,3`. Defaults to `1,..,9` and `10,..,90`
    #[arg(value_parser = parse_base)]
    bases: Vec<Vector<i32>>,
}

fn parse_base(s: &str) -> Result<Vector<i32>, String> {
    s.split(',')
        .map(|x| {
            x.trim()
                .parse::<i32>()
                .map_err(|e| format!("invalid element `{x}`: {e}"))
        })
        .collect()
}

fn default_bases() -> Vec<Vector<i32>> {
    vec![
        Vector::from([1, 2, 3, 4, 5, 6, 7, 8, 9]),
        Vector::from([10, 20, 30, 40, 50, 60, 70, 80, 90]),
    ]
}

fn run(args: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let bases = if args.bases.is_empty() {
        default_bases()
    } else {
        args.bases.clone()
    };
    let options = PrintOptions {
        linewidth: args.linewidth,
        ..PrintOptions::default()
    };

    if args.fused {
        info!("using the {} BLAS provider", CpuContext.provider());
    }

    for base in &bases {
        info!("accumulating base of length {}", base.len());
        let result = if args.checked {
            accumulate_checked(base, args.iterations)?
        } else if args.fused {
            accumulate_using(base, args.iterations, CpuContext)?
        } else {
            accumulate(base, args.iterations)?
        };
        writeln!(out, "{}", result.display_with(options))?;
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use seqaccum_math::Error;
    use test_log::test;

    use super::{run, Cli, CliError};

    fn run_with(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("seqaccum").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    const DEFAULT_OUTPUT: &str = "\
[ 4951  9902 14853 19804 24755 29706 34657 39608 44559]
[ 49510  99020 148530 198040 247550 297060 346570 396080 445590]
";

    #[test]
    fn default_run() {
        assert_eq!(run_with(&[]).unwrap(), DEFAULT_OUTPUT);
    }

    #[test]
    fn fused_and_checked_match_default() {
        assert_eq!(run_with(&["--fused"]).unwrap(), DEFAULT_OUTPUT);
        assert_eq!(run_with(&["--checked"]).unwrap(), DEFAULT_OUTPUT);
    }

    #[test]
    fn custom_bases() {
        let out = run_with(&["--iterations", "3", "1,-2", "5"]).unwrap();
        // multipliers 0, 1, 2: result = 4 * base
        assert_eq!(out, "[ 4 -8]\n[20]\n");
    }

    #[test]
    fn narrow_linewidth() {
        let out = run_with(&["--iterations", "0", "--linewidth", "6", "1,2,3,4"]).unwrap();
        assert_eq!(out, "[1 2\n 3 4]\n");
    }

    #[test]
    fn unchecked_overflow_wraps() {
        assert_eq!(run_with(&["1073741823"]).unwrap(), "[-1073746775]\n");
        assert_eq!(
            run_with(&["--fused", "1073741823"]).unwrap(),
            "[-1073746775]\n"
        );
    }

    #[test]
    fn checked_overflow_fails() {
        let err = run_with(&["--checked", "1073741823"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Accumulate(Error::Overflow {
                iteration: 2,
                position: 0
            })
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Cli::try_parse_from(["seqaccum", "1,x,3"]).is_err());
        assert!(Cli::try_parse_from(["seqaccum", "--checked", "--fused"]).is_err());
    }
}
