//! Dot notation access to nested JSON data.
//!
//! [`Dot`] wraps a JSON object and exposes get/set/add/delete/clear through
//! flattened `"a.b.c"` paths instead of nested indexing, so handling
//! multidimensional configuration stays clean.
//!
//! # Example
//!
//! ```
//! use dot_notation::Dot;
//! use serde_json::json;
//!
//! let mut config = Dot::new();
//! config
//!     .set("server.host", json!("127.0.0.1"))
//!     .set("server.port", json!(8080));
//!
//! assert_eq!(config.get("server.port"), Some(json!(8080)));
//! assert!(config.has("server.host"));
//! assert_eq!(config.get("server.tls"), None);
//!
//! config.delete("server.host");
//! assert!(!config.has("server.host"));
//! ```

pub mod dot;
pub mod iter;

pub use dot::{Data, Dot};
pub use dot_path::{format_path, parse_path, PathError};
pub use iter::DotIter;
