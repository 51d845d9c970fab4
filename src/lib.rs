pub mod ast;
pub mod batch;
pub mod encode;
pub mod error;
pub mod export;
pub mod parser;

pub use ast::{Node, Scalar};
pub use error::DefgenError;
pub use export::{Definition, flatten, write_header};
