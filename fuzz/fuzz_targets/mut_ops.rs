#![no_main]

use libfuzzer_sys::fuzz_target;

use undigraph::{infra::arbitrary::MutOpsSeq, UndirectedGraph};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = UndirectedGraph::new();

    ops.replay(&mut graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
