
pub use builders::*;
