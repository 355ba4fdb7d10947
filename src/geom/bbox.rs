//! Axis-aligned bounding box of a cell, in radians.

use crate::{CellIndex, LatLng, TWO_PI};
use geo::{coord, Intersects, LineString, Polygon, Rect};
use std::f64::consts::{FRAC_PI_2, PI};

/// How much a cell's raw vertex bbox is inflated to conservatively cover
/// every descendant down to the finest resolution.
///
/// Empirically the smallest constant that dominates descendant vertex
/// extent across the grid; changing it changes which cells a coarse-cell
/// fill test considers fully covered.
const CHILD_SCALE_FACTOR: f64 = 1.4;

/// A bounding box in latitude/longitude space, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    /// Northern latitude bound.
    pub north: f64,
    /// Southern latitude bound.
    pub south: f64,
    /// Eastern longitude bound.
    pub east: f64,
    /// Western longitude bound.
    pub west: f64,
}

impl BBox {
    /// A transmeridian bbox has its west bound east of its east bound.
    fn is_transmeridian(self) -> bool {
        self.west > self.east
    }

    fn height(self) -> f64 {
        self.north - self.south
    }

    fn width(self) -> f64 {
        if self.is_transmeridian() {
            self.east + TWO_PI - self.west
        } else {
            self.east - self.west
        }
    }

    /// Scales the box, in place, about its center so it conservatively
    /// covers every descendant of the cell it was built from.
    fn scale_for_children(&mut self) {
        let center_lat = self.south + self.height() / 2.0;
        let half_height = self.height() * CHILD_SCALE_FACTOR / 2.0;
        self.north = (center_lat + half_height).min(FRAC_PI_2);
        self.south = (center_lat - half_height).max(-FRAC_PI_2);

        let width = self.width();
        let half_width = width * CHILD_SCALE_FACTOR / 2.0;
        let center_lng = if self.is_transmeridian() {
            normalize_lng(self.west + width / 2.0)
        } else {
            self.west + width / 2.0
        };
        self.east = normalize_lng(center_lng + half_width);
        self.west = normalize_lng(center_lng - half_width);
    }

    /// Converts to a plain axis-aligned rectangle.
    ///
    /// A box straddling the antimeridian is widened to the full longitude
    /// range: the fill engine only ever uses this for conservative
    /// reject/cover tests, so a wider-than-necessary box can cost extra
    /// descents but never an incorrect prune.
    pub(super) fn to_rect(self) -> Rect<f64> {
        let (west, east) =
            if self.is_transmeridian() { (-PI, PI) } else { (self.west, self.east) };

        Rect::new(
            coord! { x: west, y: self.south },
            coord! { x: east, y: self.north },
        )
    }

    /// Converts to the 4-vertex rectangle polygon used for the "lies
    /// entirely inside the fill polygon" containment test.
    pub(super) fn to_polygon(self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Conservative bbox-vs-bbox overlap test, used by the fill engine to
    /// prune subtrees that cannot possibly be inside the target polygon.
    pub(super) fn intersects(self, other: Self) -> bool {
        self.to_rect().intersects(&other.to_rect())
    }
}

fn normalize_lng(lng: f64) -> f64 {
    if lng > PI {
        lng - TWO_PI
    } else if lng < -PI {
        lng + TWO_PI
    } else {
        lng
    }
}

/// Computes the bounding box of a cell, in radians.
///
/// When `cover_children` is `true`, the box is conservatively inflated so it
/// covers every descendant of `cell`, not just `cell`'s own boundary; this
/// is what the fill engine needs to safely prune whole subtrees.
pub fn cell_to_bbox(cell: CellIndex, cover_children: bool) -> BBox {
    let boundary = cell.boundary();
    let mut bbox = bbox_from_lnglat(
        boundary.iter().map(|ll| (ll.lng_radians(), ll.lat_radians())),
    );

    if cover_children {
        bbox.scale_for_children();
    }

    adjust_for_poles(&mut bbox, cell);

    bbox
}

/// Computes the bounding box of a (closed) ring, in radians.
///
/// Used by the fill engine for the polygon's outer loop, against which
/// every candidate cell's own bbox is pruned before the expensive exact
/// containment test.
pub(super) fn bbox_from_ring(ring: &LineString<f64>) -> BBox {
    bbox_from_lnglat(ring.coords().map(|coord| (coord.x, coord.y)))
}

/// Shared min/max scan, handling antimeridian wraparound, over a sequence of
/// (longitude, latitude) pairs in radians.
fn bbox_from_lnglat(points: impl Iterator<Item = (f64, f64)> + Clone) -> BBox {
    let lngs = points.clone().map(|(lng, _)| lng).collect::<Vec<_>>();

    let is_transmeridian = lngs
        .iter()
        .zip(lngs.iter().cycle().skip(1))
        .any(|(&a, &b)| (a - b).abs() > PI);

    let mut north = -FRAC_PI_2;
    let mut south = FRAC_PI_2;
    let mut east = -PI;
    let mut west = PI;

    for (lng, lat) in points {
        north = north.max(lat);
        south = south.min(lat);

        let lng = if is_transmeridian && lng < 0.0 { lng + TWO_PI } else { lng };
        east = east.max(lng);
        west = west.min(lng);
    }
    if is_transmeridian && east > PI {
        east -= TWO_PI;
    }

    BBox { north, south, east, west }
}

/// Pins the bbox to a full latitude band (and the whole longitude circle)
/// when `cell` contains the north or south pole: near the poles the
/// longitude of the boundary vertices becomes meaningless, and a regular
/// min/max over them would produce a box far too small.
fn adjust_for_poles(bbox: &mut BBox, cell: CellIndex) {
    let resolution = cell.resolution();

    let north_pole = LatLng::from_radians(FRAC_PI_2, 0.0)
        .expect("north pole is a valid coordinate");
    if north_pole.to_cell(resolution) == cell {
        bbox.north = FRAC_PI_2;
        bbox.east = PI;
        bbox.west = -PI;
        return;
    }

    let south_pole = LatLng::from_radians(-FRAC_PI_2, 0.0)
        .expect("south pole is a valid coordinate");
    if south_pole.to_cell(resolution) == cell {
        bbox.south = -FRAC_PI_2;
        bbox.east = PI;
        bbox.west = -PI;
    }
}

#[cfg(test)]
#[path = "./bbox_tests.rs"]
mod tests;
