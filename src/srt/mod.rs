mod cursor;
mod parser;
mod timestamp;
mod types;
mod utils;

pub use parser::{parse, parse_lenient, parse_str, Parser};
pub use timestamp::{parse_timestamp, SEPARATOR, TIMESTAMP_LEN};
pub use types::{PartialParse, Phase, SubtitleEntry, Timestamp, TimestampSide};
