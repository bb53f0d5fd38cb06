//! Error type for the crate.
use chrono::naive::NaiveDateTime;
use std::{error::Error, fmt::Display};

/// Error from the fetcher interface.
#[derive(Debug)]
pub enum NexradFetchErr {
    /// The requested window ends before it starts.
    InvalidTimeRange(NaiveDateTime, NaiveDateTime),
    /// A station identifier that is not 4 ASCII alphanumeric characters.
    InvalidStationId(String),
    /// The remote store failed a listing or download call.
    Remote(String),
    /// Error forwarded from std
    IO(std::io::Error),
}

impl Display for NexradFetchErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::error::NexradFetchErr::*;

        match self {
            InvalidTimeRange(start, end) => {
                write!(f, "start and end times out of order: {} > {}", start, end)
            }
            InvalidStationId(id) => write!(f, "invalid radar station identifier: {}", id),
            Remote(msg) => write!(f, "remote store error: {}", msg),
            IO(err) => write!(f, "std lib io error: {}", err),
        }
    }
}

impl Error for NexradFetchErr {}

impl From<std::io::Error> for NexradFetchErr {
    fn from(err: std::io::Error) -> NexradFetchErr {
        NexradFetchErr::IO(err)
    }
}
