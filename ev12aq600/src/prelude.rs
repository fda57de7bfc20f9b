pub use crate::controller::Controller;

#[cfg(feature = "link-audit")]
pub use crate::link::{Audit, AuditOption};
#[cfg(feature = "link-nop")]
pub use crate::link::Nop;

pub use ev12aq600_driver::prelude::*;
