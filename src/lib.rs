//! # Tether - Binary Stream Serialization for Networked Simulation State
//!
//! Tether encodes a fixed set of primitive types (booleans, bytes, 16/32/64-bit
//! integers, 32/64-bit floats, UTF-8 strings, 3-component float vectors) to and
//! from a contiguous little-endian byte buffer, and defines the contract by
//! which arbitrary domain objects serialize themselves through that buffer.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! tether = "0.1"
//! ```
//!
//! ```rust
//! use tether::prelude::*;
//!
//! let mut stream = BinarySerializeStream::new_empty();
//! stream
//!     .set_i32(42)
//!     .set_string("ok")
//!     .set_vector3(Vector3::new(1.0, 2.0, 3.0));
//!
//! assert_eq!(stream.try_get_i32().unwrap(), 42);
//! assert_eq!(stream.try_get_string().unwrap(), "ok");
//! assert_eq!(stream.try_get_vector3().unwrap(), Vector3::new(1.0, 2.0, 3.0));
//! ```
//!
//! ## Components
//!
//! - **`tether-structures`**: core data types ([`Vector3`]) and the shared
//!   error enum ([`TetherDataError`])
//! - **`tether-serialization`**: the [`SerializeStream`] capability trait, its
//!   binary implementation [`BinarySerializeStream`], the
//!   [`TetherSerializable`] object contract, and the [`StreamFormatter`]
//!   driver
//!
//! The encoded form is a flat sequence of values with no envelope and no type
//! tags; the reading object's own field order is the schema. Byte order is
//! fixed little-endian regardless of host.

pub use tether_serialization::{
    BinarySerializeStream, SerializeStream, StreamFormatter, TetherSerializable,
};
pub use tether_structures::{TetherDataError, Vector3};

/// Convenience re-export of the commonly used items.
pub mod prelude {
    pub use tether_serialization::{
        BinarySerializeStream, SerializeStream, StreamFormatter, TetherSerializable,
    };
    pub use tether_structures::{TetherDataError, Vector3};
}
