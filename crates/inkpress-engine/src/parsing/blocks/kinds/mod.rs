pub mod block_quote;
pub mod code_fence;
pub mod footnote;
pub mod heading;
pub mod list;
pub mod raw_tag;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use footnote::Footnote;
pub use heading::Heading;
pub use list::ListMarker;
pub use raw_tag::RawTag;
