//! This module acts as the central router for all inbound interactions.
//!
//! `router` decodes the payload and picks a response; `ids` owns the custom_id
//! grammar; `redemption` and `util` hold the background continuations that
//! patch deferred responses after the acknowledgement has gone out.

pub mod ids;
pub mod payload;
pub mod redemption;
pub mod router;
pub mod util;

pub use ids::ComponentAction;
pub use router::InteractionRouter;
