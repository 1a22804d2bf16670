//! MCP reasoning server.
//!
//! Exposes MCTS, Beam Search, R1 and Hybrid reasoning strategies as MCP
//! tools. Step-wise tools return one thought per call, `r1_reasoning` answers
//! in a single call, and the `reason_*` wrappers run a whole session from a
//! query.

pub mod cli;
pub mod error;
pub mod reasoning;
pub mod stdio;
