use std::error::Error;

use crate::station::StationId;
use chrono::naive::NaiveDate;

/// A single object in a remote listing: its key and its size in bytes as
/// reported by the store's listing metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteObject {
    pub key: String,
    pub size: u64,
}

/// The capabilities consumed from the remote object store: anonymous listing
/// under a day/station prefix and byte-for-byte object retrieval.
pub trait RemoteStore: Clone + Send {
    fn connect() -> Result<Self, Box<dyn Error>>
    where
        Self: Sized;

    /// List every object stored under the given station's directory for the
    /// given calendar day. A day with no data is an empty listing, not an
    /// error.
    fn list_day(
        &self,
        station: StationId,
        day: NaiveDate,
    ) -> Result<Vec<RemoteObject>, Box<dyn Error>>;

    /// Retrieve the full contents of one object.
    fn retrieve(&self, key: &str) -> Result<Vec<u8>, Box<dyn Error>>;
}
