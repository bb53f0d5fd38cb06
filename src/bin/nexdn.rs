//! NEXRAD Level II downloader.
//!
//! Lists the archived volume scans for one radar station over a time window,
//! reports the count and approximate size, and downloads on confirmation.

use chrono::naive::NaiveDateTime;
use clap::Parser;
use nexrad_fetch::{
    AmazonS3NexradLevel2, AssumeYes, Config, Confirmation, Fetcher, Outcome, RemoteStore,
    StationId, StdinConfirmation, TimeWindow,
};
use std::{error::Error, path::PathBuf};

const TIME_FORMAT: &str = "%Y-%m-%d/%H%M";

#[derive(Parser, Debug)]
#[command(name = "nexdn")]
#[command(version, about = "Download archived NEXRAD Level II radar scans.")]
struct Cli {
    /// First scan time [YYYY-MM-DD/HHmm]
    #[arg(short = 's', long)]
    start_time: String,

    /// Last scan time [YYYY-MM-DD/HHmm]
    #[arg(short = 'e', long)]
    end_time: String,

    /// 4-letter radar identifier [e.g. KLOT]
    #[arg(short = 'r', long)]
    radar_id: String,

    /// Directory to download files into
    #[arg(short = 'p', long, default_value = ".")]
    local_path: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        println!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let start = parse_time(&cli.start_time)?;
    let end = parse_time(&cli.end_time)?;
    let window = TimeWindow::new(start, end)?;
    let station: StationId = cli.radar_id.parse()?;

    let remote = AmazonS3NexradLevel2::connect()?;
    let config = Config::new(station, window, cli.local_path);
    let fetcher = Fetcher::connect(config, remote);

    let mut confirmation: Box<dyn Confirmation> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirmation)
    };

    match fetcher.run(confirmation.as_mut())? {
        Outcome::Downloaded(saved) => println!("{} files downloaded.", saved.len()),
        Outcome::Declined => println!("Nothing downloaded. Goodbye!"),
    }

    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveDateTime, Box<dyn Error>> {
    NaiveDateTime::parse_from_str(s, TIME_FORMAT).map_err(|err| {
        format!(
            "could not parse time {:?} (expected YYYY-MM-DD/HHmm): {}",
            s, err
        )
        .into()
    })
}
