pub mod note;
pub mod options;

pub use note::{NoteName, SourceNote};
pub use options::{EmptyLines, Options, TitleMode};
