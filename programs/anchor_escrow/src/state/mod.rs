pub mod escrow_state;
pub mod user_escrow_state;
pub mod vault_state;

pub use escrow_state::*;
pub use user_escrow_state::*;
pub use vault_state::*;
