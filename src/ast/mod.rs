pub use args::*;
pub use block::*;
pub use stmt::*;
pub use value::*;

mod args;
mod block;
mod stmt;
mod value;
