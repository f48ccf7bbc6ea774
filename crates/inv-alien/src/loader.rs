//! Alien name file loader.
//!
//! One name per line.  Surrounding whitespace is trimmed and blank lines are
//! skipped; names are otherwise taken verbatim (no case folding).

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::AlienResult;

/// Load every name from a file, in file order.
pub fn load_names(path: &Path) -> AlienResult<Vec<String>> {
    let file = std::fs::File::open(path)?;
    load_names_reader(file)
}

/// Like [`load_names`] but accepts any `Read` source.
pub fn load_names_reader<R: Read>(reader: R) -> AlienResult<Vec<String>> {
    let mut names = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_owned());
        }
    }
    tracing::debug!(names = names.len(), "loaded alien names");
    Ok(names)
}
