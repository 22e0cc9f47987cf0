pub mod srt;
pub use srt::{
    parse, parse_lenient, parse_str, Parser, PartialParse, Phase, SubtitleEntry, Timestamp,
    TimestampSide,
};

pub mod source;
pub use source::{is_srt, read_srt_file, ByteSource, LocalFile, MemorySource};

pub mod errors;
pub use errors::{ParseError, ParseErrorKind, SourceError, SrtError, SrtResult};

use log::{debug, info, warn};
use std::path::Path;

/// Read any byte source completely and run the strict parser over it.
pub fn parse_source<S: ByteSource>(source: &mut S) -> SrtResult<Vec<SubtitleEntry>> {
    let name = source.name();
    let data = source.read_all().map_err(SourceError::from)?;
    debug!("Read {} bytes from {}", data.len(), name);

    let entries = srt::parse(&data)?;
    debug!("Parsed {} subtitle entries from {}", entries.len(), name);
    Ok(entries)
}

/// Read any byte source completely and keep what parses before the first error.
pub fn parse_source_lenient<S: ByteSource>(source: &mut S) -> SrtResult<PartialParse> {
    let name = source.name();
    let data = source.read_all().map_err(SourceError::from)?;
    debug!("Read {} bytes from {}", data.len(), name);

    let partial = srt::parse_lenient(&data);
    if let Some(err) = &partial.error {
        warn!(
            "{}: stopped after {} entries: {}",
            name,
            partial.entries.len(),
            err
        );
    }
    Ok(partial)
}

pub fn load_subtitles<P: AsRef<Path>>(path: P) -> SrtResult<Vec<SubtitleEntry>> {
    info!("Loading subtitles from {:?}", path.as_ref());
    let mut file = source::open_srt_file(path)?;
    parse_source(&mut file)
}

pub fn load_subtitles_lenient<P: AsRef<Path>>(path: P) -> SrtResult<PartialParse> {
    info!("Loading subtitles (lenient) from {:?}", path.as_ref());
    let mut file = source::open_srt_file(path)?;
    parse_source_lenient(&mut file)
}
