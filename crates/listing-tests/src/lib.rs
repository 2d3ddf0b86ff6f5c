//! Contract tests for the marketplace listing API
//!
//! The library half of this crate holds what the test binaries share:
//! configuration, randomized fixtures, the per-test [`ContractContext`] and
//! the contract scenarios themselves. The binaries under `tests/` decide
//! which service each scenario runs against.
//!
//! # Running Tests
//!
//! The hermetic suite runs every scenario against the in-process stub:
//!
//! ```bash
//! cargo test -p listing-tests
//! ```
//!
//! The live suite is ignored by default and needs a base URL:
//!
//! ```bash
//! LISTING_API_BASE_URL=https://qa-internship.avito.com/api/1 \
//!     cargo test -p listing-tests --test live_contract_test -- --ignored --test-threads=1
//! ```
//!
//! Further settings (timeouts, fixed or polling consistency wait) can come
//! from a TOML file named by `LISTING_CONTRACT_CONFIG`.
//!
//! # Test Structure
//!
//! - `stub_contract_test.rs` - Every scenario against the stub
//! - `live_contract_test.rs` - Every scenario against the configured service
//! - `harness_test.rs` - The harness catches broken services

pub mod config;
pub mod context;
pub mod fixtures;
pub mod scenarios;
pub mod telemetry;

pub use config::{ConsistencyWait, HarnessConfig};
pub use context::ContractContext;
