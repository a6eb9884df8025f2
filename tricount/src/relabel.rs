//! Rewrites an edge list with arbitrary string labels into dense integer
//! ids, numbered in order of first appearance.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use bstr::ByteSlice;
use rustc_hash::FxHashMap;
use serde_json::json;

use crate::error::{Error, Result};
use crate::scanner::{self, Scanner};

const BUFSIZE: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelabelStats {
    pub edges: usize,
    pub labels: usize,
    pub malformed: usize,
}

/// Label-to-id assignment in encounter order.
#[derive(Default)]
struct Labels {
    ids: FxHashMap<Vec<u8>, u64>,
}

impl Labels {
    fn id(&mut self, label: &[u8]) -> u64 {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.ids.len() as u64;
        self.ids.insert(label.to_vec(), id);
        id
    }
}

/// Relabels the pairs read by `scanner` into `out`, one `"<id> <id>"` line
/// per input line that holds at least two words.
pub fn relabel_into<R: BufRead, W: Write>(scanner: Scanner<R>, out: &mut W) -> Result<RelabelStats> {
    let path = scanner.path().to_owned();
    let (labels, mut stats) = scanner.try_fold(
        (Labels::default(), RelabelStats::default()),
        |(mut labels, mut stats), lineno, line| {
            let mut ws = scanner::words(line);
            match (ws.next(), ws.next()) {
                (Some(a), Some(b)) => {
                    let (a, b) = (labels.id(a), labels.id(b));
                    writeln!(out, "{} {}", a, b).map_err(|e| Error::io(&path, e))?;
                    stats.edges += 1;
                }
                (None, _) => {}
                (Some(_), None) => {
                    eprintln!(
                        "{}",
                        json!({
                            "malformed_line": lineno,
                            "text": line.to_str_lossy(),
                        })
                    );
                    stats.malformed += 1;
                }
            }
            Ok((labels, stats))
        },
    )?;
    stats.labels = labels.ids.len();
    Ok(stats)
}

/// Relabels the file at `input` into a new file at `output`.
pub fn relabel(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RelabelStats> {
    let scanner = Scanner::open(input)?;
    let output = output.as_ref();
    let file = File::create(output).map_err(|e| Error::open(output, e))?;
    let mut writer = BufWriter::with_capacity(BUFSIZE, file);
    let stats = relabel_into(scanner, &mut writer)?;
    writer.flush().map_err(|e| Error::io(output, e))?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relabel_str(s: &str) -> (String, RelabelStats) {
        let mut out = Vec::new();
        let stats = relabel_into(Scanner::from_reader(s.as_bytes(), "mem"), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn numbers_labels_by_first_appearance() {
        let (out, stats) = relabel_str("alice bob\nbob carol\n\ncarol alice\ndave\n");
        assert_eq!(out, "0 1\n1 2\n2 0\n");
        assert_eq!(
            stats,
            RelabelStats {
                edges: 3,
                labels: 3,
                malformed: 1
            }
        );
    }

    #[test]
    fn numeric_labels_are_just_strings() {
        let (out, _) = relabel_str("900 -4\n-4 17\t99\n");
        assert_eq!(out, "0 1\n1 2\n");
    }

    #[test]
    fn missing_output_directory_is_file_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "a b\n").unwrap();
        let output = dir.path().join("missing").join("out.txt");
        assert!(matches!(
            relabel(&input, &output),
            Err(Error::FileOpen { .. })
        ));
    }
}
