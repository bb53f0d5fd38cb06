use crate::{station::StationId, window::TimeWindow};
use std::path::PathBuf;

/// Everything one invocation needs, fixed at construction time.
#[derive(Clone, Debug)]
pub struct Config {
    /// The radar station whose scans are wanted.
    pub station: StationId,
    /// The inclusive range of scan times to download.
    pub window: TimeWindow,
    /// Directory the scan files are written into. Must exist and be writable
    /// before any download runs.
    pub output_dir: PathBuf,
    /// Number of concurrent download workers. One worker reproduces the
    /// strictly sequential behavior.
    pub num_downloaders: usize,
}

impl Config {
    pub const DEFAULT_NUM_DOWNLOADERS: usize = 3;

    pub fn new<P>(station: StationId, window: TimeWindow, output_dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Config {
            station,
            window,
            output_dir: output_dir.into(),
            num_downloaders: Self::DEFAULT_NUM_DOWNLOADERS,
        }
    }
}
