pub mod admin;
pub mod buy_ticket;
pub mod claim_prize;
pub mod close_raffle;
pub mod draw_winner;
pub mod initialize_raffle;

pub use admin::*;
pub use buy_ticket::*;
pub use claim_prize::*;
pub use close_raffle::*;
pub use draw_winner::*;
pub use initialize_raffle::*;
