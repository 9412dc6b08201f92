use clap::Parser;
use ctxdeco_extended::{config, ContextDecorator, Multiplier};
use tracing::Level;

/// Run the identity function through a `Multiplier` decorator.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Values to pass to the decorated function
    #[arg(allow_negative_numbers = true, required = true)]
    values: Vec<i64>,
    /// Factor applied to each result (overrides --config)
    #[arg(long)]
    multiply_by: Option<i64>,
    /// Keyword arguments as a JSON object, e.g. '{"multiply_by": 3}'
    #[arg(long)]
    config: Option<String>,
    /// Log scope entry and exit
    #[arg(short, long)]
    verbose: bool,
}

fn identity(a: i64) -> i64 {
    a
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Build the decorator.
    let mut deco = match args.config.as_deref() {
        Some(json) => match config::configure_str::<Multiplier>(json) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => Multiplier::default(),
    };
    if let Some(k) = args.multiply_by {
        deco.multiply_by = k;
    }

    let mut decorated = deco.decorate(identity);
    for v in args.values {
        match decorated.call(v) {
            Ok(Some(out)) => println!("{out}"),
            Ok(None) => println!("null"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
