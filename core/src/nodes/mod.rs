pub mod exclude;
pub mod merge;
pub mod overlap;
pub mod rect;

pub use exclude::ExcludeFromMask;
pub use merge::OverMergeMasks;
pub use overlap::{CleanOverlapMasks, CleanOverlapMasksExceptSelf};
pub use rect::MaskFromPercent;
