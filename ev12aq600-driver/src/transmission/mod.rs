mod ack;
mod engine;
mod poll;

pub use ack::{Ack, AckWaiter};
pub use engine::RegisterEngine;
pub(crate) use poll::poll_until;
