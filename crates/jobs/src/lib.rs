//! Asynchronous job submission and result polling for the VCA Tech portal.
//!
//! Financing simulations are too slow to answer inline, so the portal hands
//! them to an external worker process through a durable ordered channel and
//! reads the outcome back from a key-value result store:
//!
//! ```text
//! client ──submit──► [Submitter] ──append──► channel ──► external worker
//! client ◄──poll───  [Poller]   ◄──get────  result store ◄── writes once
//! ```
//!
//! The channel and result store are injected collaborators ([`JobChannel`],
//! [`ResultStore`]); production uses the Redis implementations in
//! [`broker`], tests substitute the in-memory ones in [`memory`]. The worker
//! itself is not part of this repository — the serialized [`Job`] record and
//! the `result:{jobId}` key are the whole contract with it.

pub mod broker;
pub mod channel;
pub mod job;
pub mod memory;
pub mod poll;
pub mod submit;
pub mod watch;

pub use channel::{JobChannel, ResultStore};
pub use job::{Job, JobError, JobId, PollOutcome};
pub use poll::Poller;
pub use submit::Submitter;
pub use watch::{JobWatcher, WatchState, DEFAULT_POLL_INTERVAL};
