//! Embedded default dictionary
//!
//! The const array is generated by `build.rs` from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
