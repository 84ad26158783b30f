pub mod center_fence;
pub mod code_fence;
pub mod spoiler_fence;

pub use center_fence::CenterFence;
pub use code_fence::CodeFence;
pub use spoiler_fence::SpoilerFence;
