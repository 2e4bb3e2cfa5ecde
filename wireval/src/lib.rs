//! `wireval` provides a dynamically-typed value container for representing
//! loosely-typed data (decoded wire payloads, most typically) inside a
//! statically-typed program, analogous to a JSON-like value tree.
//!
//! # Design
//!
//! A [`Value`] is a recursive tree node that exclusively owns its children.
//! Each node carries a [`Kind`] and locks to it on first assignment: once a
//! node is an `Int64`, setting a string on it is an error, not a coercion.
//! Arrays and objects are built top-down through accessors that hand back a
//! fresh undefined child for the caller to populate.
//!
//! There is deliberately no numeric coercion, no schema validation beyond the
//! kind check, and no serialization: encoders and decoders sit on top of this
//! crate, dispatching on [`Value::kind`] and extracting through the `as_*`
//! accessors.
//!
//! # Example
//!
//! ```
//! use wireval::{Kind, Value};
//!
//! let mut root = Value::new_undefined();
//! root.object_at("seq")?.set_uint(17)?;
//! root.object_at("addrs")?.array_at(0)?.set_string("10.0.0.1")?;
//!
//! assert_eq!(root.kind(), Kind::Object);
//! assert_eq!(root.as_object().unwrap()["seq"].as_uint(), Some(17));
//! # Ok::<(), wireval::ValueError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]

extern crate alloc;

mod error;
pub use error::*;

mod kind;
pub use kind::*;

mod value;
pub use value::*;
