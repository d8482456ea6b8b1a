use std::path::Path;

use lastrim_core::Aabb2;
use lastrim_filters::select_by_mask;
use tracing::debug;

use crate::error::{LasIoError, Result};

/// A LAS/LAZ file held fully in memory.
///
/// Points keep every attribute the format carries (intensity, returns,
/// classification, GPS time, color, waveform, extra bytes). The header is
/// reused on write so scale/offset, version, point format and VLRs survive.
#[derive(Debug, Clone)]
pub struct LasCloud {
    pub header: las::Header,
    pub points: Vec<las::Point>,
}

impl LasCloud {
    pub fn new(header: las::Header, points: Vec<las::Point>) -> Self {
        Self { header, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// X/Y bounds of the points, `None` for an empty cloud.
    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.points.iter().map(|p| (p.x, p.y)))
    }

    /// Keeps the points whose mask entry is set. The header is carried over
    /// unchanged; point counts and bounds are recomputed when written.
    ///
    /// # Panics
    ///
    /// Panics if `mask` does not have one entry per point.
    pub fn select_mask(&self, mask: &[bool]) -> Self {
        Self {
            header: self.header.clone(),
            points: select_by_mask(&self.points, mask),
        }
    }
}

pub fn read_las(path: impl AsRef<Path>) -> Result<LasCloud> {
    let path = path.as_ref();
    let mut reader = las::Reader::from_path(path).map_err(|source| LasIoError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // header point count is unvalidated, so it never sizes the buffer
    let header = reader.header().clone();
    let mut points = Vec::new();
    for (index, point) in reader.points().enumerate() {
        let point = point.map_err(|source| LasIoError::ReadPoint {
            path: path.to_path_buf(),
            index: index as u64,
            source,
        })?;
        points.push(point);
    }

    debug!(
        path = %path.display(),
        points = points.len(),
        version = ?header.version(),
        "read LAS file"
    );

    Ok(LasCloud { header, points })
}

/// Writes `cloud` to `path`, creating or truncating it. A `.laz` extension
/// selects compressed output.
pub fn write_las(path: impl AsRef<Path>, cloud: &LasCloud) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        las::Writer::from_path(path, cloud.header.clone()).map_err(|source| LasIoError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, point) in cloud.points.iter().enumerate() {
        writer
            .write_point(point.clone())
            .map_err(|source| LasIoError::WritePoint {
                path: path.to_path_buf(),
                index: index as u64,
                source,
            })?;
    }

    writer.close().map_err(|source| LasIoError::Close {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), points = cloud.len(), "wrote LAS file");
    Ok(())
}
