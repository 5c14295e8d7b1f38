//! Writing finished parts to disk.

use crate::enclosure::{EnclosureParams, EnclosurePart, Feature, build};
use crate::errors::ValidationError;
use crate::io::IoError;
use crate::mesh::Mesh;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EnclosureError {
    #[error("invalid enclosure parameters: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}

/// Write `mesh` as binary STL to `path`, replacing any existing file.
pub fn export_part(
    mesh: &Mesh<Feature>,
    part: EnclosurePart,
    path: &Path,
) -> Result<(), EnclosureError> {
    mesh.write_stl_file(path)
        .map_err(|source| EnclosureError::Export {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "wrote {} ({} polygons, {:.1} mm³) to {}",
        part.name(),
        mesh.polygons.len(),
        mesh.volume(),
        path.display()
    );
    Ok(())
}

/// Build and export the base, then the top, into `dir`.
///
/// Returns the written paths in that order. The first failure aborts the run;
/// a base already written stays on disk.
pub fn generate(params: &EnclosureParams, dir: &Path) -> Result<Vec<PathBuf>, EnclosureError> {
    params.validate()?;

    let mut written = Vec::with_capacity(EnclosurePart::ALL.len());
    for part in EnclosurePart::ALL {
        let mesh = build(part, params);
        let path = dir.join(part.file_name());
        export_part(&mesh, part, &path)?;
        written.push(path);
    }
    Ok(written)
}
