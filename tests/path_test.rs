//! Integration tests for archive addressing.
#![allow(clippy::all)]
use bi5::{ArchivePath, ErrorKind, PointValue, PV_YEN_PAIR};
use chrono::{TimeZone, Utc};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero_based_month() {
        let archive = ArchivePath::parse(Path::new("GBPJPY/2012/10/03/01h_ticks.bi5")).unwrap();
        assert_eq!(archive.symbol, "GBPJPY");
        assert_eq!(
            archive.hour_start,
            Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap()
        );
        assert_eq!(archive.point_value(), PointValue::Yen);
        assert_eq!(archive.point_value().scale(), PV_YEN_PAIR);
    }

    #[test]
    fn test_parse_with_root_prefix() {
        let archive =
            ArchivePath::parse(Path::new("/data/ticks/EURUSD/2024/00/31/23h_ticks.bi5")).unwrap();
        assert_eq!(archive.symbol, "EURUSD");
        assert_eq!(
            archive.hour_start,
            Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap()
        );
        assert_eq!(archive.point_value(), PointValue::Dollar);
    }

    #[test]
    fn test_format_round_trip() {
        let time = Utc.with_ymd_and_hms(2012, 11, 3, 1, 37, 12).unwrap();
        let archive = ArchivePath::new("GBPJPY", time).unwrap();
        assert_eq!(
            archive.hour_start,
            Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap()
        );
        assert_eq!(archive.to_string(), "GBPJPY/2012/10/03/01h_ticks.bi5");
        assert_eq!(
            archive.relative_path(),
            PathBuf::from("GBPJPY/2012/10/03/01h_ticks.bi5")
        );
        assert_eq!(ArchivePath::parse(&archive.relative_path()).unwrap(), archive);
    }

    #[test]
    fn test_invalid_paths() {
        for bad in [
            "01h_ticks.bi5",
            "2012/10/03/01h_ticks.bi5",
            "GBPJPY/2012/12/03/01h_ticks.bi5",
            "GBPJPY/2012/10/32/01h_ticks.bi5",
            "GBPJPY/2012/10/03/24h_ticks.bi5",
            "GBPJPY/2012/10/03/1h_ticks.bi5",
            "GBPJPY/2012/10/03/01h_ticks.csv",
            "GBPJPY/12/10/03/01h_ticks.bi5",
            "../2012/10/03/01h_ticks.bi5",
            "./2012/10/03/01h_ticks.bi5",
            "/2012/10/03/01h_ticks.bi5",
        ] {
            let err = ArchivePath::parse(Path::new(bad)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPath, "{}", bad);
        }
    }

    #[test]
    fn test_invalid_symbol() {
        let time = Utc.with_ymd_and_hms(2012, 11, 3, 1, 0, 0).unwrap();
        assert!(ArchivePath::new("", time).is_err());
        assert!(ArchivePath::new("EUR/USD", time).is_err());
        assert!(ArchivePath::new("..", time).is_err());
        assert!(ArchivePath::new("EUR USD", time).is_err());
        assert!(ArchivePath::new("USA500IDXUSD", time).is_ok());
    }

    #[test]
    fn test_parse_stays_under_store_root() {
        let root = Path::new("/data/ticks");
        let archive =
            ArchivePath::parse(Path::new("../../EURUSD/2024/00/31/23h_ticks.bi5")).unwrap();
        let joined = root.join(archive.relative_path());
        assert!(joined.starts_with(root));
        assert!(joined
            .components()
            .all(|c| !matches!(c, std::path::Component::ParentDir)));
    }
}
