/*!
 * Command-line interface for pcg
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use pcg::album::Album;
use pcg::config::{Args, Config};
use pcg::error::Result;
use pcg::report::{AlbumReport, ReportFormat, Reporter};
use pcg::tags::ZmqTagClient;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "pcg", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    // Create configuration
    let config = Config::from_args(args);

    let default_level = if config.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(config) {
        Ok(report) => {
            let format = if report.verbose_listing_shown {
                ReportFormat::Brief
            } else {
                ReportFormat::ConsoleTable
            };
            Reporter::new(format).print_report(&report.album);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("pcg: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

struct RunOutcome {
    album: AlbumReport,
    verbose_listing_shown: bool,
}

fn run(config: Config) -> Result<RunOutcome> {
    // Validate configuration before touching the tag service or the destination
    config.validate()?;

    let tags = ZmqTagClient::connect(&config.endpoint, config.reply_timeout)?;
    log::info!("Tag service: {}", tags.endpoint());

    let verbose = config.verbose;
    let progress = if verbose {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}  Remaining: {eta_precise}",
        ) {
            progress.set_style(style);
        }
        progress.enable_steady_tick(std::time::Duration::from_millis(100));
        progress.set_prefix("🎵 Copying");
        progress
    };

    let mut album = Album::new(config, tags, progress.clone());
    let result = album.build();

    // Clear the progress bar
    progress.finish_and_clear();

    Ok(RunOutcome {
        album: result?,
        verbose_listing_shown: verbose,
    })
}
