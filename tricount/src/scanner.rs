//! This module reads newline-delimited text files of whitespace-separated
//! words, line by line, without allocating per word.
//!
//! Both the edge-list and the CSR readers sit on top of it; they differ
//! only in what they do with the words of each line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bstr::{ByteSlice, Fields};

use crate::error::{Error, Result};

const BUFSIZE: usize = 64 * 1024;

/// Whitespace-separated words of one line. Runs of spaces and tabs count
/// as a single separator and a trailing `\r` is ignored.
pub fn words(line: &[u8]) -> Fields<'_> {
    line.fields()
}

/// Parses a single word as a signed integer.
pub fn parse_int(word: &[u8]) -> Option<i64> {
    word.to_str().ok()?.parse().ok()
}

/// A `Scanner` provides sequential line-level access to a file (or any
/// buffered reader) of words.
pub struct Scanner<R = BufReader<File>> {
    reader: R,
    path: PathBuf,
}

impl Scanner {
    /// Opens `path` for scanning. This is where a missing or unreadable
    /// input surfaces as [`Error::FileOpen`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        Ok(Self {
            reader: BufReader::with_capacity(BUFSIZE, file),
            path: path.to_owned(),
        })
    }
}

impl<R: BufRead> Scanner<R> {
    /// Wraps an already-open reader; `name` is only used in error messages.
    pub fn from_reader(reader: R, name: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fold over the lines of the underlying file in order, stopping at
    /// the first error returned by `fold` or by the reader.
    ///
    /// `fold` is handed the 1-based line number and the raw line bytes
    /// without the trailing newline.
    pub fn try_fold<U, F>(self, init: U, mut fold: F) -> Result<U>
    where
        F: FnMut(U, usize, &[u8]) -> Result<U>,
    {
        let Scanner { reader, path } = self;
        let mut acc = init;
        for (i, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| Error::io(&path, e))?;
            acc = fold(acc, i + 1, &line)?;
        }
        Ok(acc)
    }

    /// Infallible-callback version of [`Scanner::try_fold`]; only read
    /// errors can stop it.
    pub fn fold<U, F>(self, init: U, mut fold: F) -> Result<U>
    where
        F: FnMut(U, usize, &[u8]) -> U,
    {
        self.try_fold(init, |acc, lineno, line| Ok(fold(acc, lineno, line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        let line = b"  12\t 7 \r";
        let ws: Vec<&[u8]> = words(line).collect();
        assert_eq!(ws, vec![&b"12"[..], &b"7"[..]]);
    }

    #[test]
    fn parse_int_rejects_garbage() {
        assert_eq!(parse_int(b"-3"), Some(-3));
        assert_eq!(parse_int(b"x3"), None);
        assert_eq!(parse_int(b"\xff"), None);
    }

    #[test]
    fn fold_numbers_lines_from_one() {
        let scanner = Scanner::from_reader(&b"a\nb\n\nc"[..], "mem");
        let seen = scanner
            .fold(Vec::new(), |mut acc, lineno, line| {
                acc.push((lineno, line.to_vec()));
                acc
            })
            .unwrap();
        assert_eq!(
            seen,
            vec![
                (1, b"a".to_vec()),
                (2, b"b".to_vec()),
                (3, b"".to_vec()),
                (4, b"c".to_vec()),
            ]
        );
    }

    #[test]
    fn open_missing_file_is_file_open_error() {
        match Scanner::open("/definitely/not/here.txt") {
            Err(Error::FileOpen { .. }) => {}
            _ => panic!("expected FileOpen"),
        }
    }
}
