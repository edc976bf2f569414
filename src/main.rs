use std::io::{self, IsTerminal};
use std::process;

use oxlox::cli::{Invocation, USAGE};
use oxlox::repl::{Editor, LineSource, Lines};
use oxlox::{driver, Config, Driver, ExitOutcome};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(oxlox::config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(invocation: Invocation, config: Config) -> driver::Result<ExitOutcome> {
    let history = config.history.clone();
    let mut driver = Driver::new(config, io::stdout(), io::stderr());
    match invocation {
        Invocation::Batch(path) => driver.run_batch(&path),
        Invocation::Interactive => {
            let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
                Box::new(Editor::new(history)?)
            } else {
                Box::new(Lines::new(io::stdin().lock()))
            };
            driver.run_interactive(source.as_mut())
        }
        Invocation::Usage => Ok(ExitOutcome::Usage),
    }
}

fn main() {
    let invocation = Invocation::from_args(std::env::args_os().skip(1));
    if invocation == Invocation::Usage {
        println!("{}", USAGE);
        process::exit(ExitOutcome::Usage.code());
    }

    let config = Config::from_env();
    init_logging(&config);

    let outcome = match run(invocation, config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{}", err);
            ExitOutcome::IoFailure
        }
    };
    process::exit(outcome.code());
}
