#![no_main]

use h3o::CellIndex;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct Args {
    origin: CellIndex,
    destination: CellIndex,
}

fuzz_target!(|args: Args| {
    let Args { origin, destination } = args;

    if let Some(edge) = origin.directed_edge_to(destination) {
        assert_eq!(edge.origin(), origin, "edge origin roundtrip");
        assert_eq!(edge.destination(), destination, "edge destination roundtrip");
        assert_eq!(edge.cells(), (origin, destination));

        let boundary = edge.boundary();
        assert!(boundary.len() >= 2, "edge boundary has at least 2 vertices");

        assert!(edge.length_rads() >= 0.0);
        assert!(edge.length_km() >= 0.0);
        assert!(edge.length_m() >= 0.0);
    }
});
