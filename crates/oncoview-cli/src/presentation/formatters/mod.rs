pub mod number;
pub mod style;

pub use number::{format_bar, format_percentage};
pub use style::{bold, dimmed, paint};
