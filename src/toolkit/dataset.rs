use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crc::{CRC_32_ISO_HDLC, Crc};
use serde::{Deserialize, Serialize};

use super::Preprocessor;
use super::errors::ToolkitError;
use crate::logging::Logger;

const LAYOUT_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

pub const MANIFEST_VERSION: u32 = 1;
pub const DATASET_SUFFIX: &str = "dataset.json";

/// Solver-ready description of a preprocessed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetManifest {
    pub format_version: u32,
    pub source: PathBuf,
    pub source_bytes: u64,
    pub crc32: u32,
}

impl DatasetManifest {
    pub fn from_layout(layout: &Path, bytes: &[u8]) -> Self {
        Self {
            format_version: MANIFEST_VERSION,
            source: layout.to_path_buf(),
            source_bytes: bytes.len() as u64,
            crc32: layout_checksum(bytes),
        }
    }
}

pub fn layout_checksum(bytes: &[u8]) -> u32 {
    LAYOUT_CRC.checksum(bytes)
}

/// `<out_dir>/<layout stem>.dataset.json`
pub fn dataset_path(layout: &Path, out_dir: &Path) -> PathBuf {
    let stem = layout
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "layout".to_string());
    out_dir.join(format!("{stem}.{DATASET_SUFFIX}"))
}

pub fn read_manifest(path: &Path) -> Result<DatasetManifest, ToolkitError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ToolkitError::FileError(format!("failed to read dataset {}: {}", path.display(), e))
    })?;
    let manifest: DatasetManifest = serde_json::from_str(&text)
        .map_err(|e| ToolkitError::ParseError(format!("dataset {}: {}", path.display(), e)))?;

    if manifest.format_version != MANIFEST_VERSION {
        return Err(ToolkitError::ParseError(format!(
            "dataset {}: unsupported format version {}",
            path.display(),
            manifest.format_version
        )));
    }
    Ok(manifest)
}

pub struct LayoutPreprocessor {
    log: Rc<Logger>,
}

impl LayoutPreprocessor {
    pub fn new(log: Rc<Logger>) -> Self {
        Self { log }
    }
}

impl Preprocessor for LayoutPreprocessor {
    fn build_from_layout(&mut self, layout: &Path, out_dir: &Path) -> Result<(), ToolkitError> {
        self.log
            .status(format!("Preprocessing layout {}", layout.display()));

        let bytes = fs::read(layout).map_err(|e| {
            ToolkitError::FileError(format!("failed to read layout {}: {}", layout.display(), e))
        })?;
        if bytes.is_empty() {
            return Err(ToolkitError::InvalidParameter(format!(
                "layout {} is empty",
                layout.display()
            )));
        }

        let manifest = DatasetManifest::from_layout(layout, &bytes);
        self.log.debug(format!(
            "Layout {} bytes, CRC 0x{:08X}",
            manifest.source_bytes, manifest.crc32
        ));

        fs::create_dir_all(out_dir).map_err(|e| {
            ToolkitError::FileError(format!(
                "failed to create output directory {}: {}",
                out_dir.display(),
                e
            ))
        })?;

        let target = dataset_path(layout, out_dir);
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| ToolkitError::ParseError(format!("dataset manifest: {}", e)))?;
        fs::write(&target, json).map_err(|e| {
            ToolkitError::FileError(format!("failed to write {}: {}", target.display(), e))
        })?;

        self.log.status(format!("Wrote dataset {}", target.display()));
        Ok(())
    }

    fn build_from_json(&mut self, _json: &Path, _out_dir: &Path) -> Result<(), ToolkitError> {
        Err(ToolkitError::NotImplemented(
            "Reading layouts from JSON".to_string(),
        ))
    }
}
