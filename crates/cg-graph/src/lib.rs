//! `cg-graph` — node deduplication, graph assembly, and JSON output.
//!
//! # Crate layout
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`graph`]    | `Graph`, `Node`, `Edge`, `NodeKind`           |
//! | [`store`]    | `NodeStore` (spatial node index)              |
//! | [`builder`]  | `GraphBuilder`                                |
//! | [`pipeline`] | `build_graph`                                 |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                |

pub mod builder;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod store;


pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node, NodeKind};
pub use pipeline::build_graph;
pub use store::NodeStore;
