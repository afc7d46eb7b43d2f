//! Flat numeric array files.
//!
//! An array file is plain text: the first whitespace-delimited token is a
//! non-negative element count `n`, followed by `n` floating-point values.
//! Anything after the first `n` values is ignored.
//!
//! ```text
//! 5
//! 0.0 0.25 0.5
//! 0.75 1.0
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{ParamError, ParamResult};

/// Source of flat numeric arrays.
///
/// Any `Fn(&Path) -> ParamResult<Vec<f64>>` closure is a loader, which lets
/// callers substitute in-memory arrays for the filesystem.
pub trait ArrayLoader {
    /// Load the array stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `MalformedArrayFile` on failure.
    fn load_array(&self, path: &Path) -> ParamResult<Vec<f64>>;
}

impl<F> ArrayLoader for F
where
    F: Fn(&Path) -> ParamResult<Vec<f64>>,
{
    fn load_array(&self, path: &Path) -> ParamResult<Vec<f64>> {
        self(path)
    }
}

/// Loader reading array files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextArrayLoader;

impl ArrayLoader for TextArrayLoader {
    fn load_array(&self, path: &Path) -> ParamResult<Vec<f64>> {
        let mut bytes = Vec::new();
        {
            let mut file = File::open(path).map_err(|source| ParamError::FileNotFound {
                path: path.to_path_buf(),
                source,
            })?;
            file.read_to_end(&mut bytes)?;
        }

        let text = std::str::from_utf8(&bytes).map_err(|e| {
            ParamError::malformed(path, format!("not valid UTF-8 text: {e}"))
        })?;
        let values = parse_array(text, path)?;
        debug!(path = %path.display(), len = values.len(), "loaded array file");
        Ok(values)
    }
}

/// Parse the contents of an array file. `path` is only used in errors.
///
/// # Errors
///
/// Returns `MalformedArrayFile` if the count is missing or not a
/// non-negative integer, a value is not numeric, or fewer than the
/// declared number of values follow.
pub fn parse_array(text: &str, path: &Path) -> ParamResult<Vec<f64>> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| ParamError::malformed(path, "missing element count"))?;
    let count: usize = count_token.parse().map_err(|_| {
        ParamError::malformed(
            path,
            format!("element count '{count_token}' is not a non-negative integer"),
        )
    })?;

    // The header is untrusted; every value needs at least two bytes.
    let mut values = Vec::with_capacity(count.min(text.len() / 2 + 1));
    for index in 0..count {
        let Some(token) = tokens.next() else {
            return Err(ParamError::malformed(
                path,
                format!("expected {count} values, found {index}"),
            ));
        };
        let value: f64 = token.parse().map_err(|_| {
            ParamError::malformed(path, format!("value {index} ('{token}') is not a number"))
        })?;
        values.push(value);
    }

    Ok(values)
}
