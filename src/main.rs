use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use ulg_core::config::{parse_cutoff, Config};
use ulg_core::OutputFormat;

#[derive(Parser)]
#[command(name = "convert", about = "Convert a device log into timing-chart JSON")]
struct Cli {
    /// Log file to convert.
    input: PathBuf,

    /// Output shape: `array` (bare record list) or `document` (records plus
    /// default visibility).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write here instead of next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Drop records stamped before this instant (RFC 3339).
    #[arg(long, conflicts_with = "no_cutoff")]
    cutoff: Option<String>,

    /// Keep records regardless of their timestamp.
    #[arg(long)]
    no_cutoff: bool,

    /// Drop lines that lack the `<timestamp>:<field>:<field>:` prefix.
    #[arg(long)]
    strict: bool,

    /// Extra config file layered over the defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(&self, cfg: &mut Config) -> anyhow::Result<()> {
        if let Some(format) = self.format {
            cfg.output.format = format;
        }
        if let Some(cutoff) = &self.cutoff {
            parse_cutoff(cutoff)?;
            cfg.extract.cutoff = cutoff.clone();
        }
        if self.no_cutoff {
            cfg.extract.cutoff = String::new();
        }
        if self.strict {
            cfg.extract.allow_untimestamped = false;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config)?;

    let done = ulg_convert::convert_file(&cli.input, cli.output.as_deref(), &config)?;
    println!("Converted {} to {}", done.input.display(), done.output.display());
    Ok(())
}
