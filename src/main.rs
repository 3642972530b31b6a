use clap::Parser;
use rastershop::cli::{CliError, ExitStatus, parse_operation};
use rastershop::imaging::FileStore;
use rastershop::{config, output, process};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rastershop")]
#[command(about = "Pixel transforms for PPM and other RGB rasters")]
#[command(long_about = "\
Pixel transforms for PPM and other RGB rasters

Reads <input>, applies one command, and writes <output>. The codec is picked
from each file's extension: .png, .jpg/.jpeg, .tif/.tiff and .webp go through
the image crate, anything else is treated as binary PPM (P6).

Commands:
  grayscale                     luma-weighted gray (0.30 R + 0.59 G + 0.11 B)
  swap                          rotate channels: (r, g, b) -> (g, b, r)
  invert                        255 - v on every channel
  zoom-out                      average 2x2 blocks; half width, half height
  rotate-right                  rotate 90 degrees clockwise
  swirl <cx> <cy> <strength>    swirl around (cx, cy); -1 means the centre
  edge-detection <threshold>    black where the luma gradient exceeds threshold

Exit codes:
  0 success            1 missing filename   2 open failed
  3 invalid raster     4 bad operation      5 wrong arg count
  6 bad arg value      7 write failed       8 other

Run 'rastershop --gen-config' to print a documented rastershop.toml.")]
#[command(version)]
struct Cli {
    /// Config file (TOML); missing file means stock defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a stock rastershop.toml with all options documented, then exit
    #[arg(long)]
    gen_config: bool,

    /// Raster to read
    input: Option<PathBuf>,

    /// Where to write the result
    output: Option<PathBuf>,

    /// Command name
    command: Option<String>,

    /// Command arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            log::debug!("exiting: {err:?}");
            eprintln!("{err}");
            if err.shows_usage() {
                output::print_usage();
            }
            err.exit_status().into()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(cli.config.as_deref())?;
    init_logging(&config.logging);

    let (Some(input), Some(output_path)) = (cli.input, cli.output) else {
        return Err(CliError::MissingFilename);
    };
    let name = cli.command.ok_or(CliError::MissingOperation)?;
    let operation = parse_operation(&name, &cli.args)?;

    let store = FileStore::new(config.decode_limits());
    let report = process::process(&store, &input, &output_path, &operation)?;
    output::print_report(&report);
    Ok(())
}

/// Route `log` output to stderr. `RUST_LOG` wins over the configured level.
fn init_logging(logging: &config::LoggingConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(logging.level.to_ascii_lowercase()),
    )
    .target(env_logger::Target::Stderr)
    .init();
}
