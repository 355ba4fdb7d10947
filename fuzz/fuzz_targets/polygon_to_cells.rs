#![no_main]

use geo::{coord, LineString, Polygon};
use h3o::{geom, Resolution};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct Args {
    resolution: Resolution,
    values: Vec<f64>,
}

fuzz_target!(|args: Args| {
    if args.values.len() < 6 {
        // Not enough points for a polygon.
        return;
    }
    // Keep the fuzzer away from pathologically large fills.
    if u8::from(args.resolution) > 6 {
        return;
    }

    let mut ring = LineString::new(
        args.values
            .chunks_exact(2)
            .map(|chunk| coord! { x: chunk[0], y: chunk[1] })
            .collect(),
    );
    ring.close();
    // Can still return false if the first point contains NaN.
    if !ring.is_closed() {
        return;
    }

    let polygon = Polygon::new(ring, Vec::new());

    if let Ok(cells) = geom::polygon_to_cells_compact(&polygon, args.resolution)
    {
        for cell in &cells {
            assert!(u8::from(cell.resolution()) <= u8::from(args.resolution));
        }
    }
});
