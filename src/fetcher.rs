use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::Write,
    path::PathBuf,
    thread::{self, JoinHandle},
};

use crate::{
    config::Config,
    confirm::Confirmation,
    key::ScanKey,
    remote::{RemoteObject, RemoteStore},
};
use crossbeam_channel::{bounded, Receiver, Sender};

/// One planned download: the remote key, where it lands locally, and its size
/// as reported by the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanEntry {
    pub key: String,
    pub local_path: PathBuf,
    pub size: u64,
}

/// The set of objects selected for download. Rebuilt from scratch on every
/// invocation, never persisted.
#[derive(Clone, Debug, Default)]
pub struct DownloadPlan {
    entries: Vec<PlanEntry>,
}

impl DownloadPlan {
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the operator sees before deciding whether to download.
#[derive(Clone, Debug)]
pub struct Report {
    keys: Vec<String>,
    total_bytes: u64,
    output_dir: PathBuf,
}

impl Report {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn file_count(&self) -> usize {
        self.keys.len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Total size in megabytes, rounded half away from zero. 2,500,000 bytes
    /// reports as 3 MB.
    pub fn approx_megabytes(&self) -> u64 {
        (self.total_bytes as f64 / 1_000_000.0).round() as u64
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        for key in &self.keys {
            writeln!(f, "{}", key)?;
        }
        writeln!(f, "==> Number of requested files: {}", self.file_count())?;
        writeln!(
            f,
            "==> Requested download is approximately: {} MB",
            self.approx_megabytes()
        )?;
        write!(
            f,
            "==> Files will be downloaded to: {}",
            self.output_dir.display()
        )
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Paths of the files written. Objects that failed to download or save
    /// are logged and absent from the list.
    Downloaded(Vec<PathBuf>),
    /// The operator said no. Nothing was written.
    Declined,
}

pub struct Fetcher<R: RemoteStore> {
    config: Config,
    remote: R,
}

impl<R: 'static> Fetcher<R>
where
    R: RemoteStore + Clone + Send,
{
    pub fn connect(config: Config, remote: R) -> Self {
        log::info!(
            "fetching {} scans from {} through {}",
            config.station,
            config.window.start(),
            config.window.end()
        );
        Self { config, remote }
    }

    /// Drive one full invocation: list, filter, report, confirm, download.
    pub fn run(&self, confirmation: &mut dyn Confirmation) -> Result<Outcome, Box<dyn Error>> {
        let objects = self.list_objects();
        let plan = self.build_plan(objects);
        let report = self.summarize(&plan);

        if !confirmation.confirm(&report) {
            log::info!("download declined by operator");
            return Ok(Outcome::Declined);
        }

        let saved = self.download(plan)?;
        Ok(Outcome::Downloaded(saved))
    }

    /// List every object under the window's day directories, in order. A
    /// listing failure costs that day's contribution but not the whole run.
    pub fn list_objects(&self) -> Vec<RemoteObject> {
        let mut objects: Vec<RemoteObject> = vec![];

        for day in self.config.window.days() {
            match self.remote.list_day(self.config.station, day) {
                Ok(mut listed) => {
                    log::debug!("{} objects listed for {}", listed.len(), day);
                    objects.append(&mut listed);
                }
                Err(err) => {
                    log::error!("error listing objects for {}: {}", day, err);
                }
            }
        }

        objects
    }

    /// Keep the data keys whose scan time falls inside the window, dropping
    /// marker files and anything that does not parse as a scan key.
    pub fn build_plan(&self, objects: Vec<RemoteObject>) -> DownloadPlan {
        let mut entries: Vec<PlanEntry> = vec![];

        for obj in objects {
            let scan = match ScanKey::parse(&obj.key) {
                Some(scan) => scan,
                None => {
                    log::debug!("skipping non-data key: {}", obj.key);
                    continue;
                }
            };

            if scan.is_marker() {
                log::debug!("skipping end-of-hour marker: {}", obj.key);
                continue;
            }

            if !self.config.window.contains(scan.scan_time()) {
                continue;
            }

            entries.push(PlanEntry {
                local_path: self.config.output_dir.join(scan.short_name()),
                key: obj.key,
                size: obj.size,
            });
        }

        DownloadPlan { entries }
    }

    /// Build the pre-download report. Read only, no side effects.
    pub fn summarize(&self, plan: &DownloadPlan) -> Report {
        Report {
            keys: plan.entries.iter().map(|e| e.key.clone()).collect(),
            total_bytes: plan.entries.iter().map(|e| e.size).sum(),
            output_dir: self.config.output_dir.clone(),
        }
    }

    /// Download every planned object. Workers fetch bytes, a single save
    /// thread owns all filesystem writes. One object failing is logged and
    /// does not stop the rest.
    pub fn download(&self, plan: DownloadPlan) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let (to_downloaders, needs_downloaded) = bounded(100);
        let (to_saver, from_downloaders) = bounded(10);

        self.start_download_threads(needs_downloaded, to_saver);
        let save_thrd = Self::start_save_thread(from_downloaders)?;

        for entry in plan.entries {
            to_downloaders.send(entry)?;
        }
        drop(to_downloaders);

        let saved = save_thrd.join().unwrap();

        Ok(saved)
    }
}

// Private methods and associated functions.

impl<R: 'static> Fetcher<R>
where
    R: RemoteStore + Clone + Send,
{
    fn start_download_threads(
        &self,
        entries: Receiver<PlanEntry>,
        to_saver: Sender<(PathBuf, Vec<u8>)>,
    ) {
        let num_downloaders = self.config.num_downloaders.max(1);

        let pool =
            threadpool::ThreadPool::with_name("Download Thread".to_owned(), num_downloaders);

        for _ in 0..num_downloaders {
            let remote = self.remote.clone();
            let to_saver = to_saver.clone();
            let entries = entries.clone();

            pool.execute(move || {
                for entry in entries {
                    log::info!("downloading {} to {:?}", entry.key, entry.local_path);

                    let data: Vec<u8> = match remote.retrieve(&entry.key) {
                        Ok(data) => data,
                        Err(err) => {
                            log::error!("error downloading {}: {}", entry.key, err);
                            continue;
                        }
                    };

                    to_saver.send((entry.local_path, data)).unwrap();
                }
            });
        }
    }

    fn start_save_thread(
        file_data: Receiver<(PathBuf, Vec<u8>)>,
    ) -> Result<JoinHandle<Vec<PathBuf>>, Box<dyn Error>> {
        let jh = thread::Builder::new()
            .name("Save Thread".into())
            .spawn(move || {
                let mut saved: Vec<PathBuf> = vec![];

                for (pth, data) in file_data {
                    let mut f = match File::create(&pth) {
                        Ok(f) => f,
                        Err(err) => {
                            log::error!("error creating file: {:?} : {}", pth, err);
                            continue;
                        }
                    };

                    match f.write_all(&data) {
                        Ok(()) => {
                            log::debug!("saved {:?}", pth);
                            saved.push(pth);
                        }
                        Err(err) => {
                            log::error!("error writing data to disk: {:?} : {}", pth, err);
                        }
                    }
                }

                saved
            })?;

        Ok(jh)
    }
}
