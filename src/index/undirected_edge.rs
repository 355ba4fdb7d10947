use super::{bits, DirectedEdgeIndex, Edge, IndexMode};
use crate::{
    coord::FaceIJK, error, grid, Boundary, CellIndex, Direction,
    EARTH_RADIUS_KM,
};
use std::{cmp::Ordering, fmt, num::NonZeroU64, str::FromStr};

/// Maximum value for a cell edge.
const MAX: u8 = 6;

/// Ownership lookup table, keyed by `(digit(cell1), digit(cell2))` at their
/// shared resolution, used to break ties between same-base-cell neighbors.
///
/// `true` means `cell1` is the owner. The last row/column (index 7) handles
/// `Direction::Invalid`, which never occurs for a valid pair but keeps the
/// table total.
#[rustfmt::skip]
const OWNERSHIP: [[bool; 8]; 8] = [
    [false, true,  true,  false, true,  false, false, false],
    [false, false, false, true,  true,  true,  false, false],
    [false, true,  false, true,  false, false, true,  false],
    [true,  false, false, false, true,  false, true,  false],
    [false, false, true,  false, false, true,  true,  false],
    [true,  false, true,  true,  false, false, false, false],
    [true,  true,  false, false, false, true,  false, false],
    [true,  true,  true,  true,  true,  true,  true,  true ],
];

/// Reorders two neighboring cells into a canonical `(owner, neighbor)` pair.
///
/// The ordering is chosen so that, across the whole grid, cells tend to own
/// about as many edges as they don't: cells on the same base cell are
/// disambiguated through their indexing digit at their shared resolution,
/// cells on different base cells through the base cell numbering.
///
/// Invalid inputs (cells at different resolutions, non-neighboring cells,
/// two copies of the same cell, ...) won't panic, but the resulting order
/// may not be stable.
pub(crate) fn canonicalize_cell_order(
    cell1: CellIndex,
    cell2: CellIndex,
) -> (CellIndex, CellIndex) {
    let bc1 = cell1.base_cell();
    let bc2 = cell2.base_cell();

    let cell1_owns = if bc1 != bc2 {
        bc1 < bc2
    } else {
        let resolution = cell1.resolution();
        // Only occurs if the same res-0 cell is passed in twice.
        if resolution == crate::Resolution::Zero {
            false
        } else {
            let digit1 = bits::get_direction(u64::from(cell1), resolution);
            let digit2 = bits::get_direction(u64::from(cell2), resolution);

            OWNERSHIP[usize::from(digit1)][usize::from(digit2)]
        }
    };

    if cell1_owns {
        (cell1, cell2)
    } else {
        (cell2, cell1)
    }
}

/// Represents a single undirected edge between two neighboring cells.
///
/// Unlike a [`crate::DirectedEdgeIndex`], this index is the same regardless
/// of which of the two cells it's accessed from: one of the two cells is
/// arbitrarily designated the "owner", which is used to compute the
/// canonical index and its boundary.
///
/// The index is encoded on 64-bit with the following bit layout:
///
/// ```text
///  ┏━┳━━━┳━━━┳━━━━━━━━━━━━━━━━━━━━━━┈┈┈┈┈┈┈┈━━━━━━━┓
///  ┃U┃ M ┃ E ┃                O                    ┃
///  ┗━┻━━━┻━━━┻━━━━━━━━━━━━━━━━━━━━━━┈┈┈┈┈┈┈┈━━━━━━━┛
/// 64 63 59   56                                    0
/// ```
///
/// Where:
/// - `U` is an unused reserved bit, always set to 0 (bit 63).
/// - `M` is the index mode, always set to 3, coded on 4 bits (59-62).
/// - `E` is the edge of the owner cell, in [1; 6], coded on 3 bits (56-58).
/// - `O` is the owner cell index, coded on 56 bits (0-55).
///
/// References:
/// - [H3 Index Representations](https://h3geo.org/docs/core-library/h3Indexing)
/// - [H3 Index Bit Layout](https://observablehq.com/@nrabinowitz/h3-index-bit-layout?collection=@nrabinowitz/h3)
/// - [H3 Index Inspector](https://observablehq.com/@nrabinowitz/h3-index-inspector?collection=@nrabinowitz/h3)
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedEdgeIndex(NonZeroU64);

impl UndirectedEdgeIndex {
    /// Returns the cell edge, relative to the owner cell.
    ///
    /// # Example
    ///
    /// ```
    /// let src = h3o::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let dst = h3o::CellIndex::try_from(0x8a1fb46622d7fff)?;
    /// let index = src.edge_to(dst).expect("neighboring cells");
    /// let _edge = index.edge();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn edge(self) -> Edge {
        // SAFETY: `UndirectedEdgeIndex` only contains a valid cell edge
        // (invariant).
        Edge::new_unchecked(bits::get_edge(self.0.get()))
    }

    /// Returns the owner cell of this undirected edge.
    ///
    /// # Example
    ///
    /// ```
    /// let src = h3o::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let dst = h3o::CellIndex::try_from(0x8a1fb46622d7fff)?;
    /// let index = src.edge_to(dst).expect("neighboring cells");
    /// assert!(index.owner() == src || index.owner() == dst);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn owner(self) -> CellIndex {
        let bits = bits::set_mode(self.0.get(), IndexMode::Cell);
        CellIndex::new_unchecked(bits::clr_edge(bits))
    }

    /// Returns the `(owner, neighbor)` pair of cells linked by this edge.
    ///
    /// The owner cell is always the first element of the pair.
    ///
    /// # Example
    ///
    /// ```
    /// let src = h3o::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let dst = h3o::CellIndex::try_from(0x8a1fb46622d7fff)?;
    /// let index = src.edge_to(dst).expect("neighboring cells");
    /// let (owner, neighbor) = index.cells();
    /// assert_eq!(owner, index.owner());
    /// assert!((owner, neighbor) == (src, dst) || (owner, neighbor) == (dst, src));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn cells(self) -> (CellIndex, CellIndex) {
        let owner = self.owner();
        let direction = Direction::from(self.edge());
        // Every edge has a neighbor in its direction.
        let neighbor = grid::neighbor_rotations(owner, direction, 0)
            .expect("neighbor cell")
            .0;

        (owner, neighbor)
    }

    /// Returns the coordinates defining the edge.
    ///
    /// # Example
    ///
    /// ```
    /// let src = h3o::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let dst = h3o::CellIndex::try_from(0x8a1fb46622d7fff)?;
    /// let index = src.edge_to(dst).expect("neighboring cells");
    /// let boundary = index.boundary();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn boundary(self) -> Boundary {
        let direction = Direction::from(self.edge());
        let owner = self.owner();
        let start_vertex = direction.vertex(owner);

        let fijk = FaceIJK::from(owner);
        let resolution = owner.resolution();
        if owner.is_pentagon() {
            fijk.pentagon_boundary(resolution, start_vertex, 2)
        } else {
            fijk.hexagon_boundary(resolution, start_vertex, 2)
        }
    }

    /// Computes the length of this edge, in radians.
    ///
    /// # Example
    ///
    /// ```
    /// let src = h3o::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let dst = h3o::CellIndex::try_from(0x8a1fb46622d7fff)?;
    /// let index = src.edge_to(dst).expect("neighboring cells");
    /// assert!(index.length_rads() > 0.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn length_rads(self) -> f64 {
        let boundary = self.boundary();

        (0..boundary.len() - 1)
            .map(|i| boundary[i].distance_rads(boundary[i + 1]))
            .sum()
    }

    /// Computes the length of this edge, in kilometers.
    #[must_use]
    pub fn length_km(self) -> f64 {
        self.length_rads() * EARTH_RADIUS_KM
    }

    /// Computes the length of this edge, in meters.
    #[must_use]
    pub fn length_m(self) -> f64 {
        self.length_km() * 1000.
    }

    /// Initializes a new undirected edge index using a value that may be
    /// invalid.
    ///
    /// # Safety
    ///
    /// The value must be a valid, canonical undirected edge index.
    pub(crate) fn new_unchecked(value: u64) -> Self {
        debug_assert!(Self::try_from(value).is_ok(), "invalid edge index");
        Self(NonZeroU64::new(value).expect("valid edge index"))
    }
}

impl Ord for UndirectedEdgeIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        /// Bitmask to hide the resolution and edge.
        const MASK: u64 = 0xf80f_ffff_ffff_ffff;

        // Order by index first, then by edge.
        (self.0.get() & MASK, self.edge())
            .cmp(&(other.0.get() & MASK, other.edge()))
    }
}

impl PartialOrd for UndirectedEdgeIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<UndirectedEdgeIndex> for u64 {
    fn from(value: UndirectedEdgeIndex) -> Self {
        value.0.get()
    }
}

impl TryFrom<u64> for UndirectedEdgeIndex {
    type Error = error::InvalidUndirectedEdgeIndex;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if bits::get_mode(value) != u8::from(IndexMode::UndirectedEdge) {
            return Err(Self::Error::new(Some(value), "invalid index mode"));
        }

        // Clear the highest byte and validate the owner part.
        let bits = bits::set_mode(value, IndexMode::Cell);
        let bits = bits::clr_edge(bits);
        let owner = CellIndex::try_from(bits)
            .map_err(|err| Self::Error::new(Some(value), err.reason))?;

        // An hexagon has 6 edges (1-6), while a pentagon only has 5 (2-6):
        // the deleted K axis cannot be a valid edge direction on a pentagon.
        let min_edge = 1 + u8::from(owner.is_pentagon());
        let edge = bits::get_edge(value);
        if !(min_edge..=MAX).contains(&edge) {
            return Err(Self::Error::new(Some(value), "invalid cell edge"));
        }

        // The easiest way to ensure the edge is the canonical one (i.e. that
        // `owner` really is the cell designated as the owner of this pair)
        // is to recompute the ordering and compare.
        let direction = Direction::new_unchecked(edge);
        let neighbor = grid::neighbor_rotations(owner, direction, 0)
            .map(|result| result.0)
            .ok_or_else(|| {
                Self::Error::new(Some(value), "no neighbor in that direction")
            })?;
        let (canonical_owner, _) = canonicalize_cell_order(owner, neighbor);
        if canonical_owner != owner {
            return Err(Self::Error::new(
                Some(value),
                "non-canonical cell order",
            ));
        }

        // XXX: 0 is rejected by the mode check (mode cannot be 0).
        Ok(Self(NonZeroU64::new(value).expect("non-zero edge index")))
    }
}

impl FromStr for UndirectedEdgeIndex {
    type Err = error::InvalidUndirectedEdgeIndex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16)
            .map_err(|_| Self::Err {
                value: None,
                reason: "invalid 64-bit hex number",
            })
            .and_then(Self::try_from)
    }
}

impl fmt::Debug for UndirectedEdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:015o}_{} ({})",
            self.owner().base_cell(),
            u64::from(*self) & bits::DIRECTIONS_MASK,
            self.edge(),
            self
        )
    }
}

impl fmt::Display for UndirectedEdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:x}")
    }
}

impl fmt::Binary for UndirectedEdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Octal for UndirectedEdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for UndirectedEdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for UndirectedEdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl From<DirectedEdgeIndex> for UndirectedEdgeIndex {
    /// Returns the undirected edge encompassing this directed edge.
    ///
    /// # Example
    ///
    /// ```
    /// use h3o::{DirectedEdgeIndex, UndirectedEdgeIndex};
    ///
    /// let directed = DirectedEdgeIndex::try_from(0x13a194e699ab7fff)?;
    /// let undirected = UndirectedEdgeIndex::from(directed);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    fn from(value: DirectedEdgeIndex) -> Self {
        let (origin, destination) = value.cells();

        // The two cells making up a directed edge are always neighbors.
        origin.edge_to(destination).expect("undirected edge")
    }
}

impl From<UndirectedEdgeIndex> for DirectedEdgeIndex {
    /// Reinterprets this edge as a directed edge from its owner cell.
    ///
    /// # Example
    ///
    /// ```
    /// use h3o::{CellIndex, DirectedEdgeIndex, UndirectedEdgeIndex};
    ///
    /// let src = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let dst = CellIndex::try_from(0x8a1fb46622d7fff)?;
    /// let undirected = src.edge_to(dst).expect("neighboring cells");
    /// let directed = DirectedEdgeIndex::from(undirected);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    fn from(value: UndirectedEdgeIndex) -> Self {
        let bits = bits::set_mode(value.0.get(), IndexMode::DirectedEdge);

        Self::new_unchecked(bits)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for UndirectedEdgeIndex {
    fn arbitrary(
        data: &mut arbitrary::Unstructured<'a>,
    ) -> arbitrary::Result<Self> {
        u64::arbitrary(data).and_then(|byte| {
            Self::try_from(byte).map_err(|_| arbitrary::Error::IncorrectFormat)
        })
    }
}

#[cfg(test)]
#[path = "./undirected_edge_tests.rs"]
mod tests;
