//! Loading several independent files at once.
//!
//! Each file gets its own [`Document`] and arena, so nothing is shared
//! between workers. Without the `parallel` feature the files are loaded
//! one after another.

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{decode, DecodeOptions, Document, Result};

#[cfg(feature = "parallel")]
pub fn load_files_parallel<P>(paths: &[P], options: &DecodeOptions) -> Vec<Result<Document>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| decode::from_file(path.as_ref(), options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn load_files_parallel<P>(paths: &[P], options: &DecodeOptions) -> Vec<Result<Document>>
where
    P: AsRef<Path>,
{
    paths
        .iter()
        .map(|path| decode::from_file(path.as_ref(), options))
        .collect()
}
