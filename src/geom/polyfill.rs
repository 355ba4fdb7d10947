//! Fill a polygon with the cells that cover it.
//!
//! The walk is depth-first over the cell tree: starting from the base cells,
//! a coarse cell whose (inflated) bounding box cannot possibly intersect the
//! polygon is skipped outright, one whose covering rectangle lies entirely
//! inside the polygon is emitted as-is, and everything else is expanded into
//! its children and re-examined one resolution finer.

use super::bbox::{bbox_from_ring, cell_to_bbox, BBox};
use super::tiler::ring_is_valid;
use crate::{
    error::PolyfillError,
    index::{next_cell, Children},
    CellIndex, LatLng, Resolution,
};
use geo::{coord, Contains, Polygon};

/// Resolution (and, in the future, inclusion policy) for a polygon fill.
///
/// Kept as a dedicated type rather than a bare [`Resolution`] argument so a
/// policy knob (e.g. "centroid inside" vs. "any overlap") can be added later
/// as a new field without changing every call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolyfillConfig {
    resolution: Resolution,
}

impl PolyfillConfig {
    /// Initializes a new polyfill configuration targeting the given
    /// resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use h3o::{geom::PolyfillConfig, Resolution};
    ///
    /// let config = PolyfillConfig::new(Resolution::Nine);
    /// ```
    #[must_use]
    pub const fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }
}

fn validate_polygon(polygon: &Polygon<f64>) -> Result<(), PolyfillError> {
    ring_is_valid(polygon.exterior())?;
    for interior in polygon.interiors() {
        ring_is_valid(interior)?;
    }
    Ok(())
}

/// Builds the per-ring bounding boxes used to prune the walk, honoring the
/// fault-injection hook so tests can exercise the allocation-failure path.
fn bounding_boxes(polygon: &Polygon<f64>) -> Result<Vec<BBox>, PolyfillError> {
    let wanted = 1 + polygon.interiors().len();

    let mut bboxes = Vec::new();
    bboxes
        .try_reserve(fault_injection::reserve_amount(wanted))
        .map_err(|_| PolyfillError::Alloc)?;

    bboxes.push(bbox_from_ring(polygon.exterior()));
    for interior in polygon.interiors() {
        bboxes.push(bbox_from_ring(interior));
    }

    Ok(bboxes)
}

/// Pull iterator yielding the compact cover of a polygon: cells at, or
/// coarser than, the target resolution whose territory lies inside it.
///
/// Whenever a coarse cell's covering bounding box is fully contained by the
/// polygon the whole subtree is emitted as that single cell, instead of
/// being expanded all the way down to the target resolution.
pub struct CompactIter<'a> {
    polygon: &'a Polygon<f64>,
    resolution: Resolution,
    bbox: BBox,
    cursor: Option<CellIndex>,
    exhausted: bool,
}

impl<'a> CompactIter<'a> {
    /// Initializes a new iterator over the compact cell cover of `polygon`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyfillError::InvalidGeometry`] if the polygon contains a
    /// degenerate ring or a non-finite/out-of-range coordinate, and
    /// [`PolyfillError::Alloc`] if the internal bounding-box buffer cannot
    /// be allocated.
    pub fn new(
        polygon: &'a Polygon<f64>,
        config: PolyfillConfig,
    ) -> Result<Self, PolyfillError> {
        validate_polygon(polygon)?;
        let bboxes = bounding_boxes(polygon)?;

        Ok(Self {
            polygon,
            resolution: config.resolution,
            // Only the exterior ring's box is used to prune; the holes
            // themselves are handled by `geo::Contains`, which already
            // understands ring subtraction.
            bbox: bboxes[0],
            cursor: CellIndex::base_cells().next(),
            exhausted: false,
        })
    }
}

impl Iterator for CompactIter<'_> {
    type Item = Result<CellIndex, PolyfillError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        while let Some(cell) = self.cursor {
            let cell_resolution = cell.resolution();

            if cell_resolution == self.resolution {
                let center = LatLng::from(cell);
                let point = coord! {
                    x: center.lng_radians(),
                    y: center.lat_radians(),
                };

                if self.polygon.contains(&point) {
                    self.cursor = next_cell(cell);
                    return Some(Ok(cell));
                }
            } else if cell_resolution < self.resolution {
                let covering = cell_to_bbox(cell, true);

                if self.bbox.intersects(covering) {
                    if self.polygon.contains(&covering.to_polygon()) {
                        self.cursor = next_cell(cell);
                        return Some(Ok(cell));
                    }

                    // Partial overlap: can't decide at this resolution,
                    // descend into the center child and keep walking from
                    // there instead of skipping the whole subtree.
                    let child_resolution = cell_resolution
                        .succ()
                        .expect("resolution below the target has a successor");
                    self.cursor = cell.center_child(child_resolution);
                    continue;
                }
            }

            self.cursor = next_cell(cell);
        }

        self.exhausted = true;
        None
    }
}

/// Pull iterator yielding every individual cell, at the target resolution,
/// that covers a polygon.
///
/// Expands each cell produced by an inner [`CompactIter`] down to the
/// target resolution, one cell at a time, without ever materializing the
/// whole result set.
pub struct FineIter<'a> {
    compact: CompactIter<'a>,
    resolution: Resolution,
    children: Option<Children>,
}

impl<'a> FineIter<'a> {
    /// Initializes a new iterator over the fine-grained cell cover of
    /// `polygon`.
    ///
    /// # Errors
    ///
    /// See [`CompactIter::new`].
    pub fn new(
        polygon: &'a Polygon<f64>,
        config: PolyfillConfig,
    ) -> Result<Self, PolyfillError> {
        let resolution = config.resolution;
        let compact = CompactIter::new(polygon, config)?;

        Ok(Self { compact, resolution, children: None })
    }
}

impl Iterator for FineIter<'_> {
    type Item = Result<CellIndex, PolyfillError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(children) = self.children.as_mut() {
                if let Some(cell) = children.next() {
                    return Some(Ok(cell));
                }
                self.children = None;
            }

            match self.compact.next()? {
                Ok(cell) => {
                    self.children =
                        Some(Children::new(cell, self.resolution));
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Returns the set of cells, at the given resolution, whose centroid lies
/// within `polygon`.
///
/// # Errors
///
/// Returns [`PolyfillError`] if the polygon is invalid, or if building the
/// cell set fails.
///
/// # Example
///
/// ```
/// use geo::polygon;
/// use h3o::{geom::polygon_to_cells, Resolution};
///
/// // A small ring expressed in radians, around (lng: -2.1, lat: 0.6).
/// let polygon = polygon![
///     (x: -2.101, y: 0.599),
///     (x: -2.101, y: 0.601),
///     (x: -2.099, y: 0.601),
///     (x: -2.099, y: 0.599),
///     (x: -2.101, y: 0.599),
/// ];
/// let cells = polygon_to_cells(&polygon, Resolution::Nine)?;
/// # Ok::<(), h3o::error::PolyfillError>(())
/// ```
pub fn polygon_to_cells(
    polygon: &Polygon<f64>,
    resolution: Resolution,
) -> Result<Vec<CellIndex>, PolyfillError> {
    FineIter::new(polygon, PolyfillConfig::new(resolution))?.collect()
}

/// Returns the compact set of cells, at or coarser than the given
/// resolution, that cover `polygon`.
///
/// # Errors
///
/// Returns [`PolyfillError`] if the polygon is invalid, or if building the
/// cell set fails.
///
/// # Example
///
/// ```
/// use geo::polygon;
/// use h3o::{geom::polygon_to_cells_compact, Resolution};
///
/// // A small ring expressed in radians, around (lng: -2.1, lat: 0.6).
/// let polygon = polygon![
///     (x: -2.101, y: 0.599),
///     (x: -2.101, y: 0.601),
///     (x: -2.099, y: 0.601),
///     (x: -2.099, y: 0.599),
///     (x: -2.101, y: 0.599),
/// ];
/// let cells = polygon_to_cells_compact(&polygon, Resolution::Nine)?;
/// # Ok::<(), h3o::error::PolyfillError>(())
/// ```
pub fn polygon_to_cells_compact(
    polygon: &Polygon<f64>,
    resolution: Resolution,
) -> Result<Vec<CellIndex>, PolyfillError> {
    CompactIter::new(polygon, PolyfillConfig::new(resolution))?.collect()
}


#[cfg(not(test))]
mod fault_injection {
    pub(super) const fn reserve_amount(requested: usize) -> usize {
        requested
    }
}

#[cfg(test)]
#[path = "./polyfill_tests.rs"]
mod tests;
