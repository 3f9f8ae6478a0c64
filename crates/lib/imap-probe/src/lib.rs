//! IMAP service availability probe.
//!
//! The probe connects to a target, waits for the IMAP greeting, issues a
//! `LOGOUT` and checks both untagged `BYE` and tagged `OK` responses.
//! Everything short of the full exchange is reported as unavailable.

mod attempt;
mod error;
mod handshake;
mod parameters;
mod policy;
mod poll;
mod status;
mod target;

pub use error::*;
pub use handshake::{BANNER_PREFIX, BYE_PREFIX, LOGOUT_OK_PREFIX, LOGOUT_REQUEST, Mismatch};
pub use parameters::*;
pub use policy::*;
pub use poll::*;
pub use status::*;
pub use target::*;
