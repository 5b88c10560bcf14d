
//! Run every anti-diagonal scenario and dump the results into a directory.

use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Context;
use clap::Parser;
use log::{error, info};
use bitpix::prelude::*;

/// Draw an anti-diagonal into bit-packed images with every pixel access method
/// and compare the results with golden checksums.
#[derive(Debug, Parser)]
#[command(name = "bitpix-regress", version, about)]
struct Arguments {

    /// Directory the dump files are written to. Created if missing.
    output_directory: PathBuf,

    /// Width of the images.
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Height of the images.
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Only verify, without writing dump files.
    #[arg(long)]
    no_dump: bool,
}

impl Arguments {
    fn options(&self) -> RegressionOptions {
        RegressionOptions {
            resolution: Vec2(self.width, self.height),
            dump_directory: if self.no_dump { None } else { Some(self.output_directory.clone()) },
            .. RegressionOptions::default()
        }
    }
}

fn run(arguments: &Arguments) -> anyhow::Result<Report> {
    let options = arguments.options();

    if let Some(directory) = &options.dump_directory {
        std::fs::create_dir_all(directory)
            .with_context(|| format!("cannot create output directory {}", directory.display()))?;
    }

    run_all(&options).context("regression run aborted")
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let arguments = Arguments::parse();

    match run(&arguments) {
        Ok(report) if report.is_success() => {
            info!("no errors detected");
            ExitCode::SUCCESS
        },

        Ok(report) => {
            error!("{} of {} checks failed", report.failure_count(), report.checks());
            ExitCode::FAILURE
        },

        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        },
    }
}
