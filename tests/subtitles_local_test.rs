use srtparser::{
    load_subtitles, load_subtitles_lenient, parse_source, MemorySource, ParseErrorKind,
    SourceError, SrtError, Timestamp,
};
use std::io::Write;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/sample.srt");

#[test]
fn test_read_local_subtitles() {
    let subtitles = load_subtitles(SAMPLE);

    assert!(
        subtitles.is_ok(),
        "Failed to read subtitles: {:?}",
        subtitles.err()
    );
    let subtitles = subtitles.unwrap();

    assert_eq!(subtitles.len(), 4);
    let first = &subtitles[0];
    assert_eq!(first.index, 1);
    assert_eq!(first.lines, vec!["[SERENE MUSIC]"]);
    assert_eq!(first.start, Timestamp::new(0, 0, 1, 600));

    assert_eq!(
        subtitles[1].lines,
        vec!["Where are we going?", "- Somewhere quiet."]
    );
    assert!(subtitles[2].lines.is_empty());
    assert_eq!(subtitles[3].start.to_string(), "01:02:03,004");
    assert_eq!(subtitles[3].lines, vec!["<i>The end.</i>"]);
}

#[test]
fn test_timestamps_render_back_to_source_tokens() {
    let raw = std::fs::read_to_string(SAMPLE).unwrap();
    let re = regex::Regex::new(r"(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})").unwrap();
    let expected: Vec<(String, String)> = re
        .captures_iter(&raw)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect();

    let subtitles = load_subtitles(SAMPLE).unwrap();
    let rendered: Vec<(String, String)> = subtitles
        .iter()
        .map(|s| (s.start.to_string(), s.end.to_string()))
        .collect();
    assert_eq!(rendered, expected);
}

#[test]
fn test_malformed_file_reports_location() {
    let mut file = tempfile::Builder::new().suffix(".srt").tempfile().unwrap();
    write!(
        file,
        "1\n00:00:01,000 --> 00:00:02,000\nok\n\n2\n00:00:03,000 -> 00:00:04,000\nbroken\n"
    )
    .unwrap();

    match load_subtitles(file.path()) {
        Err(SrtError::Parse(e)) => {
            assert_eq!(e.kind, ParseErrorKind::MalformedTimingLine);
            assert_eq!(e.line, 6);
            assert_eq!(e.token, "00:00:03,000 -> 00:00:04,000");
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    let partial = load_subtitles_lenient(file.path()).unwrap();
    assert_eq!(partial.entries.len(), 1);
    assert_eq!(partial.entries[0].lines, vec!["ok"]);
    assert!(partial.error.is_some());
}

#[test]
fn test_non_srt_path_is_refused() {
    let file = tempfile::Builder::new().suffix(".vtt").tempfile().unwrap();
    assert!(matches!(
        load_subtitles(file.path()),
        Err(SrtError::Source(SourceError::UnsupportedExtension(_)))
    ));
}

#[test]
fn test_parse_memory_source() {
    let mut source = MemorySource::new("inline", "5\n00:00:00,000 --> 00:00:00,500\nhey\n");
    let entries = parse_source(&mut source).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index, 5);
    assert_eq!(entries[0].duration().as_millis(), 500);
}
