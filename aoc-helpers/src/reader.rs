//! Reading puzzle input into lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// All lines from `reader`, without line terminators (`\n` or `\r\n`)
pub fn lines_from_reader<R: Read>(reader: R) -> io::Result<Vec<String>> {
    BufReader::new(reader).lines().collect()
}

/// All lines of the file at `path`
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    lines_from_reader(File::open(path)?)
}
