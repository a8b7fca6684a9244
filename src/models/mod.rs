pub mod category;
pub mod subject;

pub use category::*;
pub use subject::*;
