//! Shared utilities for ghedit integration tests
//!
//! Engine tests drive a [`mock_remote::MockRemote`] that keeps an in-memory
//! repository; CLI tests run the binary inside a [`sandbox::Sandbox`] so no
//! real config or state directory is touched.

pub mod assertions;
pub mod fixtures;
pub mod mock_remote;
pub mod sandbox;
