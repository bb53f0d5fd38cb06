use chrono::naive::NaiveDateTime;

/// A remote object key parsed against the archive's naming convention.
///
/// Level II keys look like `2020/05/23/KLOT/KLOT20200523_120611_V06`: date
/// directories, a station directory, and a basename of the station repeated
/// plus the scan time plus a product suffix. Anything that does not match
/// that shape is not a radar data file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanKey {
    key: String,
    short_name: String,
    scan_time: NaiveDateTime,
}

/// Marker tag on the end-of-hour metadata objects mixed in with the scans.
const MARKER_TAG: &str = "_MDM";

impl ScanKey {
    /// Parse a listed key, returning `None` for anything that is not a data
    /// key. This replaces pattern matching with a tokenizer over the fixed
    /// grammar: `.../<station>/<station><YYYYMMDD>_<HHMMSS><suffix>`.
    pub fn parse(key: &str) -> Option<ScanKey> {
        let mut segments = key.rsplit('/');
        let basename = segments.next()?;
        let station_dir = segments.next()?;

        if station_dir.len() != 4 || !station_dir.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }

        let bytes = basename.as_bytes();
        if bytes.len() < 19 || &bytes[..4] != station_dir.as_bytes() {
            return None;
        }

        let digits_ok = bytes[4..12].iter().all(|b| b.is_ascii_digit())
            && bytes[12] == b'_'
            && bytes[13..19].iter().all(|b| b.is_ascii_digit());
        if !digits_ok {
            return None;
        }

        // Still fallible, e.g. a 13th month.
        let scan_time = NaiveDateTime::parse_from_str(&basename[4..19], "%Y%m%d_%H%M%S").ok()?;

        Some(ScanKey {
            key: key.to_owned(),
            short_name: basename.to_owned(),
            scan_time,
        })
    }

    /// The full key as listed by the remote store.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The basename with all leading directory components stripped.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn scan_time(&self) -> NaiveDateTime {
        self.scan_time
    }

    /// True for end-of-hour metadata objects, which are not volume scans.
    pub fn is_marker(&self) -> bool {
        self.short_name.contains(MARKER_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_a_data_key() {
        let key = "2020/05/23/KLOT/KLOT20200523_120611_V06";
        let scan = ScanKey::parse(key).unwrap();

        assert_eq!(scan.key(), key);
        assert_eq!(scan.short_name(), "KLOT20200523_120611_V06");
        assert_eq!(
            scan.scan_time(),
            NaiveDate::from_ymd_opt(2020, 5, 23)
                .unwrap()
                .and_hms_opt(12, 6, 11)
                .unwrap()
        );
        assert!(!scan.is_marker());
    }

    #[test]
    fn parses_a_key_with_a_bucket_prefix() {
        let key = "noaa-nexrad-level2/2020/05/23/KLOT/KLOT20200523_120611_V06";
        let scan = ScanKey::parse(key).unwrap();
        assert_eq!(scan.short_name(), "KLOT20200523_120611_V06");
    }

    #[test]
    fn rejects_malformed_keys() {
        // No directory component at all.
        assert!(ScanKey::parse("KLOT20200523_120611_V06").is_none());
        // Station directory is not 4 characters.
        assert!(ScanKey::parse("2020/05/23/KLO/KLO20200523_120611_V06").is_none());
        // Basename does not repeat the station directory.
        assert!(ScanKey::parse("2020/05/23/KLOT/KDVN20200523_120611_V06").is_none());
        // Too few date digits.
        assert!(ScanKey::parse("2020/05/23/KLOT/KLOT2020053_120611_V06").is_none());
        // Missing the underscore separator.
        assert!(ScanKey::parse("2020/05/23/KLOT/KLOT20200523A120611_V06").is_none());
        // Truncated basename.
        assert!(ScanKey::parse("2020/05/23/KLOT/KLOT20200523_12").is_none());
        // Digits in the right places but not a real date.
        assert!(ScanKey::parse("2020/05/23/KLOT/KLOT20201323_120611_V06").is_none());
    }

    #[test]
    fn flags_end_of_hour_markers() {
        let scan = ScanKey::parse("2020/05/23/KLOT/KLOT20200523_120000_MDM").unwrap();
        assert!(scan.is_marker());
    }
}
