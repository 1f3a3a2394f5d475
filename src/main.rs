use clap::Parser;
use mutscreen::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("mutscreen=debug,info")
    } else {
        EnvFilter::new("mutscreen=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Screen(args) => {
            cli::screen::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Markers(args) => {
            cli::markers::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Interactive(args) => {
            cli::interactive::run(&args, cli.format)?;
        }
    }

    Ok(())
}
