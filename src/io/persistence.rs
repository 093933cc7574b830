//! JSON save and load of trained transition models
//!
//! Only raw edge counts are written; out-degrees and the grand total are
//! rebuilt on load, so a restored model is exactly the one that was saved.

use std::collections::BTreeSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::transitions::TransitionModel;
use crate::io::configuration::MODEL_FORMAT_VERSION;
use crate::io::error::{AlgorithmError, Result, WithPath};
use crate::io::image::ensure_parent_dir;
use crate::spatial::color::Color;

#[derive(Debug, Serialize, Deserialize)]
struct ModelDocument {
    version: u32,
    edges: Vec<EdgeRecord>,
}

/// Colors are stored packed as `R<<24 | G<<16 | B<<8 | A`
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    from: u32,
    to: u32,
    count: u64,
}

/// Serialize a model to a JSON string
///
/// # Errors
///
/// Returns `ModelFormat` if encoding fails.
pub fn model_to_json(model: &TransitionModel) -> Result<String> {
    let document = ModelDocument {
        version: MODEL_FORMAT_VERSION,
        edges: model
            .edges()
            .map(|(from, to, count)| EdgeRecord {
                from: from.to_packed(),
                to: to.to_packed(),
                count,
            })
            .collect(),
    };
    Ok(serde_json::to_string(&document)?)
}

/// Rebuild a model from its JSON form
///
/// # Errors
///
/// Returns `ModelFormat` for malformed JSON and `InvalidSourceData` for an
/// unsupported version, a zero count or a repeated edge.
pub fn model_from_json(json: &str) -> Result<TransitionModel> {
    let document: ModelDocument = serde_json::from_str(json)?;
    if document.version != MODEL_FORMAT_VERSION {
        return Err(AlgorithmError::InvalidSourceData {
            reason: format!(
                "unsupported model version {} (expected {MODEL_FORMAT_VERSION})",
                document.version
            ),
        });
    }

    let mut seen = BTreeSet::new();
    let mut model = TransitionModel::new();
    for record in document.edges {
        let from = Color::from_packed(record.from);
        let to = Color::from_packed(record.to);
        if record.count == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("edge {from} -> {to} has zero count"),
            });
        }
        if !seen.insert((from, to)) {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("edge {from} -> {to} appears more than once"),
            });
        }
        model.record_edges(from, to, record.count)?;
    }

    model.check_invariants()?;
    Ok(model)
}

/// Write a model to `path`
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_model(model: &TransitionModel, path: &Path) -> Result<()> {
    let json = model_to_json(model).with_path(path)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, json).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "write model",
        source: e,
    })?;
    info!(
        "Saved model with {} pairs to {}",
        model.total_pairs(),
        path.display()
    );
    Ok(())
}

/// Read a model from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid model.
pub fn load_model(path: &Path) -> Result<TransitionModel> {
    let json = std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read model",
        source: e,
    })?;
    let model = model_from_json(&json).with_path(path)?;
    info!(
        "Loaded model with {} pairs from {}",
        model.total_pairs(),
        path.display()
    );
    Ok(model)
}
