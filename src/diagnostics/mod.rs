//! Reports produced by the vision cycle for tools and logging.
//!
//! `CycleReport` bundles the outputs of every stage of one cycle together with
//! the time each stage took. Everything here serializes to camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{CycleReport, FrameDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
