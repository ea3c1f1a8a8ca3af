pub mod merkle;
pub mod oracle;
pub mod token;

pub use merkle::*;
pub use oracle::*;
pub use token::*;
