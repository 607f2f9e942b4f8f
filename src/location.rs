use crate::data::ProgramRecord;

/// Whether the program's install location starts with `drive_prefix`, ignoring case.
/// Programs without an install location are never on any drive.
pub fn is_on_drive(record: &ProgramRecord, drive_prefix: &str) -> bool {
    record
        .install_location
        .as_deref()
        .is_some_and(|location| {
            location
                .to_uppercase()
                .starts_with(&drive_prefix.to_uppercase())
        })
}

/// Keeps only the programs installed under `drive_prefix`, preserving order
pub fn filter_by_drive(
    records: impl IntoIterator<Item = ProgramRecord>,
    drive_prefix: &str,
) -> Vec<ProgramRecord> {
    records
        .into_iter()
        .filter(|record| {
            let is_on_drive = is_on_drive(record, drive_prefix);
            if !is_on_drive {
                tracing::trace!(
                    "Filtered out '{}' as it is not installed under {drive_prefix}: {:?}",
                    record.name,
                    record.install_location
                );
            }
            is_on_drive
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::data::SupportedSources;

    fn record(name: &str, install_location: Option<&str>) -> ProgramRecord {
        ProgramRecord {
            name: name.to_owned(),
            install_location: install_location.map(String::from),
            publisher: None,
            source_tag: None,
            source: SupportedSources::UninstallUser,
        }
    }

    #[test_case(Some(r"D:\Games\Foo"), "D:", true; "on drive")]
    #[test_case(Some(r"d:\games\foo"), "D:", true; "lower case location")]
    #[test_case(Some(r"D:\Games\Foo"), "d:", true; "lower case prefix")]
    #[test_case(Some(r"C:\Games\Foo"), "D:", false; "other drive")]
    #[test_case(Some(r"\\server\D:\Games"), "D:", false; "prefix not at start")]
    #[test_case(Some(""), "D:", false; "empty location")]
    #[test_case(None, "D:", false; "no location")]
    #[test_case(Some(r"E:\Games\Foo"), r"E:\Games", true; "longer prefix")]
    #[test_case(Some(r"C:\Foo"), "", true; "empty prefix")]
    #[test_case(None, "", false; "empty prefix without location")]
    fn test_is_on_drive(location: Option<&str>, prefix: &str, expected: bool) {
        assert_eq!(is_on_drive(&record("Foo", location), prefix), expected);
    }

    #[test]
    fn test_filter_by_drive() {
        let records = vec![
            record("First", Some(r"D:\Games\First")),
            record("Second", Some(r"C:\Games\Second")),
            record("Third", None),
            record("Fourth", Some(r"d:\Fourth")),
        ];

        let names: Vec<String> = filter_by_drive(records, "D:")
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["First", "Fourth"]);
    }
}
