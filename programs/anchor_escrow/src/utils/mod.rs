pub mod lamports;
pub mod pda;

pub use lamports::*;
pub use pda::*;
