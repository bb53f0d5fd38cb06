use crate::{
    error::NexradFetchErr,
    remote::{RemoteObject, RemoteStore},
    station::StationId,
};
use chrono::{naive::NaiveDate, Datelike};
use s3::{bucket::Bucket, creds::Credentials, region::Region};
use std::error::Error;

/// The public NOAA Level II archive on AWS open data.
const BUCKET: &str = "noaa-nexrad-level2";
const REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct AmazonS3NexradLevel2 {
    bucket: Bucket,
}

impl AmazonS3NexradLevel2 {
    /// Objects for one station and day all live under this prefix.
    fn day_prefix(station: StationId, day: NaiveDate) -> String {
        format!(
            "{:04}/{:02}/{:02}/{}/",
            day.year(),
            day.month(),
            day.day(),
            station
        )
    }
}

impl RemoteStore for AmazonS3NexradLevel2 {
    fn connect() -> Result<Self, Box<dyn Error>>
    where
        Self: Sized,
    {
        let region: Region = REGION.parse()?;
        let credentials = Credentials::anonymous()?;
        let bucket = Bucket::new(BUCKET, region, credentials)?;

        Ok(AmazonS3NexradLevel2 { bucket })
    }

    fn list_day(
        &self,
        station: StationId,
        day: NaiveDate,
    ) -> Result<Vec<RemoteObject>, Box<dyn Error>> {
        let prefix = Self::day_prefix(station, day);

        // A day with no data comes back as an empty listing, not an error.
        let results = self.bucket.list_blocking(prefix, Some("/".into()))?;

        let mut objects: Vec<RemoteObject> = vec![];
        for res in results {
            for obj in &res.contents {
                objects.push(RemoteObject {
                    key: obj.key.clone(),
                    size: obj.size,
                });
            }
        }

        Ok(objects)
    }

    fn retrieve(&self, key: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let (data, code) = self.bucket.get_object_blocking(key)?;

        if code != 200 {
            return Err(Box::new(NexradFetchErr::Remote(format!(
                "download failed with status {} for {}",
                code, key
            ))));
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_prefix_is_zero_padded() {
        let station: StationId = "klot".parse().unwrap();
        let day = NaiveDate::from_ymd_opt(2020, 5, 3).unwrap();

        assert_eq!(
            AmazonS3NexradLevel2::day_prefix(station, day),
            "2020/05/03/KLOT/"
        );
    }
}
