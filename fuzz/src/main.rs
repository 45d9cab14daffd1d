#![allow(clippy::all)]

use afl::fuzz;
use arbitrary::Arbitrary;
use gendiff::{apply, compact, configure, make_limited, SliceCompare};

#[derive(Arbitrary, Debug)]
enum FuzzVariant {
    Bytes(Vec<u8>, Vec<u8>),
    Lines(String, String),
}

#[derive(Arbitrary, Debug)]
struct FuzzOptions {
    context_len: Option<u8>,
    variant: FuzzVariant,
}

fn main() {
    fuzz!(|data: FuzzOptions| {
        let mut config = configure();
        config
            .max_cells(Some(1 << 20))
            .context_len(data.context_len.map(usize::from));

        match data.variant {
            FuzzVariant::Bytes(old, new) => {
                if let Ok(diffs) = make_limited(&SliceCompare::new(&old, &new), Some(1 << 20)) {
                    assert_eq!(apply(&diffs, &new), new);
                    let _ = compact(&diffs, data.context_len.unwrap_or(0).into());
                }
            }
            FuzzVariant::Lines(old, new) => {
                let old: Vec<_> = old.lines().collect();
                let new: Vec<_> = new.lines().collect();
                let _ = config.diff(&SliceCompare::new(&old, &new));
            }
        };
    });
}
