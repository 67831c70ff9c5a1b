pub mod initialize;
pub mod stake;
pub mod cancel;
pub mod release;

pub use initialize::*;
pub use stake::*;
pub use cancel::*;
pub use release::*;
