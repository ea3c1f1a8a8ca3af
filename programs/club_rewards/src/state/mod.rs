pub mod academy;
pub mod asset_root;
pub mod claim_state;
pub mod club_state;
pub mod cohort_state;
pub mod gate;
pub mod prize_distributor;

pub use academy::*;
pub use asset_root::*;
pub use claim_state::*;
pub use club_state::*;
pub use cohort_state::*;
pub use gate::*;
pub use prize_distributor::*;
