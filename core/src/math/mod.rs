pub mod resize;
pub mod stats;

pub use resize::ResizeHelper;
pub use stats::StatsHelper;
