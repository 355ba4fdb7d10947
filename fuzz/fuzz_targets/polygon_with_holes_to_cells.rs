#![no_main]

use geo::{coord, LineString, Polygon};
use h3o::{geom, Resolution};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct Args {
    resolution: Resolution,
    values: Vec<Vec<f64>>,
}

fuzz_target!(|args: Args| {
    if u8::from(args.resolution) > 6 {
        return;
    }

    let mut rings = args
        .values
        .into_iter()
        .filter_map(|coords| {
            if coords.len() < 6 {
                return None;
            }
            let mut ring = LineString::new(
                coords
                    .chunks_exact(2)
                    .map(|chunk| coord! { x: chunk[0], y: chunk[1] })
                    .collect(),
            );
            ring.close();
            ring.is_closed().then_some(ring)
        })
        .collect::<Vec<_>>();

    if rings.len() < 2 {
        // Not enough loops for 1 ring and 1 hole.
        return;
    }
    let outer = rings.pop().expect("checked above");
    rings.truncate(16); // Avoid too many holes.

    let polygon = Polygon::new(outer, rings);

    if let Ok(cells) = geom::polygon_to_cells(&polygon, args.resolution) {
        for cell in &cells {
            assert_eq!(cell.resolution(), args.resolution);
        }
    }
});
