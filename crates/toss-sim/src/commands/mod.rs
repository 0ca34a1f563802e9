pub mod binary;
pub mod element;
pub mod extend;
pub mod frequencies;
pub mod replace;
pub mod summary;
pub mod toss;

use std::error::Error;
use std::fs;
use std::path::Path;

use toss_core::{from_json_slice, to_canonical_json_bytes, RngHandle, TossSeries};
use tracing::info;

pub(crate) fn load_series(path: &Path) -> Result<TossSeries, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    let series = from_json_slice(&bytes)?;
    Ok(series)
}

pub(crate) fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut bytes = to_canonical_json_bytes(value)?;
    bytes.push(b'\n');
    fs::write(path, bytes)?;
    info!(path = %path.display(), "wrote artefact");
    Ok(())
}

pub(crate) fn rng_for(seed: Option<u64>) -> RngHandle {
    match seed {
        Some(seed) => RngHandle::from_seed(seed),
        None => RngHandle::from_entropy(),
    }
}
