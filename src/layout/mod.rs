//! Media grid layout planning.
//!
//! A post carries up to four media attachments, and the UI lays them
//! out differently depending on how many there are and which way they
//! face. [`grid::plan_layout`] is the pure decision function behind
//! that: case rules for one to three items, an exhaustive permutation
//! search for exactly four, and a flow-grid fallback for anything else.
//!
//! Layout only consumes each item's width and height; the media kind
//! matters to rendering, not placement.

pub mod grid;
