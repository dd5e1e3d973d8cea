mod mode;
mod option;
mod value;

pub use mode::SelectionMode;
pub use option::{OptionId, SelectOption};
pub use value::Value;
