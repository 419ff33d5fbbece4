//! Swap workflow: request, accept, reject and cancel.

mod service;


pub use service::{SwapRequest, SwapService};
