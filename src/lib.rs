/**************************************************************************************************
 *                                           Public API
 *************************************************************************************************/
pub use crate::{
    config::Config,
    confirm::{AssumeYes, Confirmation, StdinConfirmation},
    error::NexradFetchErr,
    fetcher::{DownloadPlan, Fetcher, Outcome, PlanEntry, Report},
    key::ScanKey,
    remote::{RemoteObject, RemoteStore},
    s3_remote::AmazonS3NexradLevel2,
    station::StationId,
    window::TimeWindow,
};
/**************************************************************************************************
 *                                      Private Implementation
 *************************************************************************************************/
mod config;
mod confirm;
mod error;
mod fetcher;
mod key;
mod remote;
mod s3_remote;
mod station;
mod window;
