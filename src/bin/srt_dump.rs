use srtparser::{load_subtitles, load_subtitles_lenient, SrtError, SubtitleEntry};
use std::env;
use std::process::ExitCode;

struct Options {
    json: bool,
    lenient: bool,
    path: String,
}

fn parse_args() -> Option<Options> {
    let mut json = false;
    let mut lenient = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--lenient" => lenient = true,
            _ if path.is_none() && !arg.starts_with("--") => path = Some(arg),
            _ => return None,
        }
    }
    Some(Options {
        json,
        lenient,
        path: path?,
    })
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let Some(options) = parse_args() else {
        eprintln!("Usage: srt_dump [--json] [--lenient] <file.srt>");
        eprintln!("Example: srt_dump tests/testdata/sample.srt");
        return ExitCode::from(2);
    };

    let (entries, failure) = if options.lenient {
        match load_subtitles_lenient(&options.path) {
            Ok(partial) => (partial.entries, partial.error.map(SrtError::Parse)),
            Err(e) => (Vec::new(), Some(e)),
        }
    } else {
        match load_subtitles(&options.path) {
            Ok(entries) => (entries, None),
            Err(e) => (Vec::new(), Some(e)),
        }
    };

    if let Err(e) = print_entries(&entries, options.json) {
        eprintln!("Failed to render entries: {}", e);
        return ExitCode::FAILURE;
    }

    match failure {
        None => ExitCode::SUCCESS,
        Some(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_entries(entries: &[SubtitleEntry], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }
    for entry in entries {
        println!("{}: {}\n", entry.index, entry.text());
    }
    Ok(())
}

fn report(err: &SrtError) {
    match err {
        SrtError::Parse(e) => {
            eprintln!("error: {}", e.kind);
            eprintln!("  phase:  {}", e.phase);
            eprintln!("  offset: {}", e.offset);
            eprintln!("  line:   {}", e.line);
            eprintln!("  token:  {:?}", e.token);
        }
        SrtError::Source(e) => eprintln!("error: {}", e),
    }
}
