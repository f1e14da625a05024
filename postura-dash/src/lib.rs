//! Library surface of the dashboard binary, split out so the rendering
//! helpers can be integration-tested.

pub mod presenter;
