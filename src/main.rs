use clap::Parser;
use katacheck::check_and_report;
use katacheck::harness::Reporter;
use katacheck::problems::ProblemKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "katacheck",
    about = "Checks an exercise solution against its key",
    long_about = "katacheck runs the learner's solution and the reference key of an exercise on every \
                  case of a CSV test table and reports PASS/FAIL per case.\nSet RUST_LOG for diagnostics."
)]
struct CliArgs {
    /// Exercise to check
    #[arg(value_enum)]
    problem: ProblemKind,

    /// Test table to run [default: problems/<PROBLEM>/tests.csv]
    #[arg(short = 't', long = "tests")]
    tests: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() {
    // Diagnostics on stderr, report on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = CliArgs::parse();
    let path = args
        .tests
        .unwrap_or_else(|| args.problem.default_tests_path());
    let reporter = Reporter::new(!args.no_color);

    let mut out = std::io::stdout().lock();
    if let Err(err) = check_and_report(args.problem, &path, &reporter, &mut out) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
