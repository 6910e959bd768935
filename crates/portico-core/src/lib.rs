//! # portico-core — Foundational Types for the Portico Stack
//!
//! Defines the type-system primitives shared by every other crate in the
//! workspace: identifier newtypes, the UTC-only `Timestamp`, actor roles,
//! and the shared error hierarchy. Every other crate depends on
//! `portico-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ServiceId`, `EventId`,
//!    `TaskId`, `HistoryId` — all UUID newtypes. No bare strings or raw
//!    UUIDs cross crate boundaries, so a task identifier cannot be passed
//!    where a service identifier is expected.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. History ordering and renewal-date
//!    arithmetic both depend on a single unambiguous clock representation.
//!
//! 3. **Single `ActorRole` enum.** One definition, exhaustive `match`
//!    everywhere a role influences behavior.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `portico-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod actor;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use actor::ActorRole;
pub use error::CoreError;
pub use identity::{EventId, HistoryId, ServiceId, TaskId};
pub use temporal::Timestamp;
