#![no_main]

use h3o::{CellIndex, Resolution};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct Args {
    index: CellIndex,
    res: Resolution,
}

fuzz_target!(|args: Args| {
    let Args { index, res } = args;

    if let Some(parent) = index.parent(res) {
        assert_eq!(parent.resolution(), res, "parent resolution");
        assert_eq!(parent.base_cell(), index.base_cell(), "parent base cell");
    }

    if let Some(child) = index.center_child(res) {
        assert_eq!(child.resolution(), res, "center child resolution");
        assert_eq!(
            child.parent(index.resolution()),
            Some(index),
            "center child roundtrip"
        );
    }

    // Do not generate children when the generation gap is too large (OOM
    // risk for the fuzzer).
    if u8::from(res).saturating_sub(u8::from(index.resolution())) < 8 {
        let count = index.children_count(res);
        let children = index.children(res).collect::<Vec<_>>();
        assert_eq!(children.len() as u64, count, "children count");
        for child in children {
            assert_eq!(child.parent(index.resolution()), Some(index));
        }
    }
});
