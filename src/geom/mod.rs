//! Bridge between H3 entities and geometrical shapes.

mod bbox;
mod polyfill;
mod tiler;

use tiler::cell_boundary;

pub use bbox::BBox;
pub use polyfill::{
    polygon_to_cells, polygon_to_cells_compact, CompactIter, FineIter,
    PolyfillConfig,
};

use crate::LatLng;

// Check that the coordinate are finite and in a legit range.
fn coord_is_valid(coord: geo::Coord) -> bool {
    use crate::TWO_PI;
    use std::f64::consts::PI;

    coord.x.is_finite()
        && coord.y.is_finite()
        && coord.x >= -TWO_PI
        && coord.x <= TWO_PI
        && coord.y >= -PI
        && coord.y <= PI
}

/// Return the geometry of this cell, if it crosses the trans-meridian two polygons are returned.
///
/// # Example
///
/// ```
/// let cell = h3o::CellIndex::try_from(0x8a1fb46622dffff)?;
/// let geom = cell_to_multi_polygon(cell);
/// # Ok::<(), h3o::error::InvalidCellIndex>(())
/// ```
#[must_use]
pub fn cell_to_multi_polygon(cell: crate::CellIndex) -> geo::MultiPolygon {
    let mut polygons = cell_boundary(cell);
    // converts back everything to degrees
    polygons.iter_mut().for_each(|polygon| {
        polygon.exterior_mut(|line| {
            line.coords_mut().for_each(|coord| {
                let ll = LatLng::new_unchecked(coord.y, coord.x);
                *coord = geo::coord! {
                    x: ll.lng(),
                    y: ll.lat(),
                };
            });
        });
    });
    polygons
}
