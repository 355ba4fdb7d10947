#![no_main]

use h3o::{CellIndex, DirectedEdgeIndex, UndirectedEdgeIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bits: u64| {
    if let Ok(index) = CellIndex::try_from(bits) {
        assert_eq!(u64::from(index), bits);
    }
    if let Ok(index) = DirectedEdgeIndex::try_from(bits) {
        assert_eq!(u64::from(index), bits);
    }
    if let Ok(index) = UndirectedEdgeIndex::try_from(bits) {
        assert_eq!(u64::from(index), bits);
    }
});
