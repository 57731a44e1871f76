// SPDX-License-Identifier: Apache-2.0

//! Entry points: parse then bind.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Serialize};

use crate::cell_library::CellLibrary;
use crate::error::LibraryError;
use crate::info::LibraryInfo;
use crate::parser::Parser;
use crate::util::human_readable_size;

/// Reader switches. The defaults accept what common vendor libraries
/// contain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Accept a simple attribute whose `;` is missing, as long as the next
    /// token starts another statement or closes the group.
    pub allow_no_semi: bool,
    /// Treat a keyword that is unknown, or not valid in the enclosing group,
    /// as an error instead of skipping it with a warning.
    pub strict_unknown_keywords: bool,
}

/// Reads a library from Liberty text.
pub fn read_liberty_str(text: &str, options: &ReadOptions) -> Result<CellLibrary, LibraryError> {
    read_liberty_bytes(text.bytes(), options)
}

/// Reads a library from any byte stream.
pub fn read_liberty_bytes<I: Iterator<Item = u8>>(
    bytes: I,
    options: &ReadOptions,
) -> Result<CellLibrary, LibraryError> {
    let parsed = Parser::new(bytes, options).parse()?;
    log::debug!(
        "parsed {} AST values, {} failed entries",
        parsed.arena.len(),
        parsed.failures.len()
    );
    LibraryInfo::bind(parsed)
}

/// Reads a `.lib` file, or a gzip-compressed `.lib.gz`.
pub fn read_liberty(path: &Path, options: &ReadOptions) -> Result<CellLibrary> {
    let file = File::open(path).with_context(|| format!("opening '{}'", path.display()))?;
    let size = file.metadata().map(|m| m.len()).unwrap_or(0);
    log::info!("reading '{}' ({})", path.display(), human_readable_size(size));

    let is_gz = path.extension().map(|e| e == "gz").unwrap_or(false);
    let mut reader: Box<dyn Read> = if is_gz {
        Box::new(MultiGzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };
    let mut buf = Vec::<u8>::new();
    reader
        .read_to_end(&mut buf)
        .with_context(|| format!("reading '{}'", path.display()))?;
    if is_gz {
        log::debug!("decompressed to {}", human_readable_size(buf.len() as u64));
    }

    read_liberty_bytes(buf.into_iter(), options)
        .with_context(|| format!("reading Liberty library '{}'", path.display()))
}
