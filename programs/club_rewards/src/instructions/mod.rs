pub mod academy_admin;
pub mod claim;
pub mod deposit;
pub mod gate;
pub mod initialize_academy;
pub mod initialize_distributor;
pub mod mint_players;
pub mod register_club;
pub mod set_merkle_root;
pub mod set_relayer;

pub use academy_admin::*;
pub use claim::*;
pub use deposit::*;
pub use gate::*;
pub use initialize_academy::*;
pub use initialize_distributor::*;
pub use mint_players::*;
pub use register_club::*;
pub use set_merkle_root::*;
pub use set_relayer::*;
