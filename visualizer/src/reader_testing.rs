#[cfg(test)]
mod reader_tests {
    use crate::results_reader::{parse_records, read, save, ReadError, StrategyRecord};
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    /// Ten well-formed records, one per line.
    fn sample_text(trailing_newline: bool) -> String {
        let mut text: String = (0..10)
            .map(|i| format!("strategy-{i}:{:.2}:{:.2}\n", i as f64 + 0.5, i as f64 * 0.25))
            .collect();
        if !trailing_newline {
            text.pop();
        }
        text
    }

    #[test]
    fn test_parse_well_formed_file() {
        let records = parse_records(&sample_text(true)).unwrap();

        assert_eq!(10, records.len());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(format!("strategy-{i}"), record.name);
            assert_relative_eq!(i as f64 + 0.5, record.mean);
            assert_relative_eq!(i as f64 * 0.25, record.stddev);
        }
    }

    #[test]
    fn test_trailing_newline_is_discarded() {
        // The trailing newline produces a synthetic empty final element,
        // which must not count as a record.
        let records = parse_records(&sample_text(true)).unwrap();
        assert_eq!(10, records.len());
        assert_eq!("strategy-9", records[9].name);
    }

    #[test]
    fn test_missing_trailing_newline_keeps_the_last_record() {
        // Dropping the last split element unconditionally would lose the
        // final record of a file without a trailing newline; skipping
        // empty lines keeps it.
        let records = parse_records(&sample_text(false)).unwrap();
        assert_eq!(10, records.len());
        assert_eq!("strategy-9", records[9].name);
    }

    #[test]
    fn test_record_count_follows_the_file() {
        let nine: String = sample_text(true).lines().take(9).fold(
            String::new(),
            |mut acc, line| {
                acc.push_str(line);
                acc.push('\n');
                acc
            },
        );
        assert_eq!(9, parse_records(&nine).unwrap().len());

        let eleven = format!("{}extra:1.00:0.50\n", sample_text(true));
        assert_eq!(11, parse_records(&eleven).unwrap().len());
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let text = "a:1.0:0.1\nb:2.0\nc:3.0:0.3\n";
        match parse_records(text) {
            Err(ReadError::MalformedRecord { line, content }) => {
                assert_eq!(2, line);
                assert_eq!("b:2.0", content);
            }
            other => panic!("expected a malformed record error, got {:?}", other),
        }

        // Too many fields is just as malformed as too few
        let text = "a:1.0:0.1:surplus\n";
        assert!(matches!(
            parse_records(text),
            Err(ReadError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_field_is_an_error() {
        match parse_records("name:notanumber:1.0\n") {
            Err(ReadError::InvalidNumber { line, field, .. }) => {
                assert_eq!(1, line);
                assert_eq!("mean", field);
            }
            other => panic!("expected an invalid number error, got {:?}", other),
        }

        assert!(matches!(
            parse_records("name:1.0:notanumber\n"),
            Err(ReadError::InvalidNumber { field: "stddev", .. })
        ));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(parse_records(""), Err(ReadError::NoRecords)));
        assert!(matches!(parse_records("\n\n"), Err(ReadError::NoRecords)));
    }

    #[test]
    fn test_read_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");
        assert!(matches!(read(&path), Err(ReadError::Io(_))));
    }

    #[test]
    fn test_save_and_read() {
        // Values that survive the two-decimal format exactly
        let records = vec![
            StrategyRecord {
                name: "trusting-t4t".to_string(),
                mean: -12.5,
                stddev: 3.25,
            },
            StrategyRecord {
                name: "evil".to_string(),
                mean: -2.75,
                stddev: 0.5,
            },
        ];

        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        save(&records, &path).unwrap();

        let restored = read(&path).unwrap();
        assert_eq!(records, restored, "A saved file must read back unchanged");
    }
}
