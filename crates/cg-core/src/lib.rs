//! `cg-core` — foundational types for the campus_graph toolkit.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                |
//! |------------|-----------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance          |
//! | [`ids`]    | `NodeId`                                |
//! | [`config`] | `BuildConfig`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildConfig;
pub use geo::{GeoPoint, EARTH_RADIUS_M};
pub use ids::NodeId;
