//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn during the last
//! render, and `region_at()` says which one is under a screen position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_regions_tests.rs"]
mod layout_regions_tests;
