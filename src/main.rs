use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vertag::application::{retag_tree, RetagOptions};
use vertag::cli::{format_record_line, format_summary, Cli};
use vertag::error::RetagError;
use vertag::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RetagError> {
    let root = if cli.root.as_os_str() == "." {
        FileSystemRepository::current()?
    } else {
        FileSystemRepository::new(cli.root)
    };

    let options = RetagOptions {
        dry_run: cli.dry_run,
    };
    let dry_run = options.dry_run;

    let report = retag_tree(&root, options, |record| {
        println!("{}", format_record_line(record, dry_run));
    })?;

    // stdout carries only the per-record lines
    eprintln!("{}", format_summary(&report));
    Ok(())
}
