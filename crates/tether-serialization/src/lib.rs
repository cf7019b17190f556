//! # Tether Serialization
//!
//! This crate provides the stream abstraction and binary implementation used to
//! serialize Tether data to and from contiguous byte buffers. It offers a
//! unified serialization framework through the [`TetherSerializable`] trait and
//! typed byte-stream access via [`SerializeStream`] / [`BinarySerializeStream`].
//!
//! ## Core Components
//!
//! - **[`SerializeStream`]** - Capability trait exposing paired get/set
//!   operations per primitive type over an encoded buffer
//! - **[`BinarySerializeStream`]** - Growable little-endian byte buffer with a
//!   read cursor, the concrete encoding used on the wire
//! - **[`TetherSerializable`]** - Contract for objects that write and read
//!   their own fields through a stream in a fixed, object-defined order
//! - **[`StreamFormatter`]** - Driver pairing one stream with the object
//!   contract
//!
//! ## Basic Usage
//!
//! ```rust
//! use tether_serialization::{BinarySerializeStream, SerializeStream};
//!
//! let mut stream = BinarySerializeStream::new_empty();
//! stream.set_i32(7).set_string("pulse");
//!
//! assert_eq!(stream.try_get_i32().unwrap(), 7);
//! assert_eq!(stream.try_get_string().unwrap(), "pulse");
//! assert_eq!(stream.get_number_of_bytes_remaining(), 0);
//! ```
//!
//! The encoded form carries no envelope, no type tags, and no schema: producer
//! and consumer must traverse fields in the same order and with the same types.

mod binary_stream;
mod formatter;
mod serializable;
mod serialize_stream;

pub use binary_stream::BinarySerializeStream;
pub use formatter::StreamFormatter;
pub use serializable::TetherSerializable;
pub use serialize_stream::SerializeStream;
