use crate::{SerializeStream, TetherSerializable};
use tether_structures::TetherDataError;
use tracing::trace;

/// Driver pairing one stream with the [`TetherSerializable`] contract.
///
/// The formatter owns its stream for its lifetime and delegates to the
/// object's own serialize/deserialize routine; it performs no buffering and
/// no error translation of its own, so stream errors reach the caller
/// unchanged. It never owns or caches the objects it formats beyond the
/// single call.
///
/// # Example
/// ```
/// use tether_serialization::{
///     BinarySerializeStream, SerializeStream, StreamFormatter, TetherSerializable,
/// };
/// use tether_structures::TetherDataError;
///
/// #[derive(Default)]
/// struct Tick {
///     count: i64,
/// }
///
/// impl TetherSerializable for Tick {
///     fn serialize(&self, stream: &mut dyn SerializeStream) -> Result<(), TetherDataError> {
///         stream.set_i64(self.count);
///         Ok(())
///     }
///
///     fn deserialize(&mut self, stream: &mut dyn SerializeStream) -> Result<(), TetherDataError> {
///         self.count = stream.try_get_i64()?;
///         Ok(())
///     }
/// }
///
/// let mut formatter = StreamFormatter::new(BinarySerializeStream::new_empty());
/// formatter.serialize(&Tick { count: 99 }).unwrap();
///
/// let mut decoded = Tick::default();
/// formatter.deserialize(&mut decoded).unwrap();
/// assert_eq!(decoded.count, 99);
/// ```
pub struct StreamFormatter<S: SerializeStream> {
    stream: S,
}

impl<S: SerializeStream> StreamFormatter<S> {
    /// Creates a formatter around the given stream.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Borrows the underlying stream.
    pub fn get_stream_ref(&self) -> &S {
        &self.stream
    }

    /// Mutably borrows the underlying stream, e.g. to load bytes before a
    /// deserialize pass.
    pub fn get_stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Consumes the formatter and returns the stream it was driving.
    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Rewinds the stream's cursor to 0 without touching buffer contents.
    pub fn reset(&mut self) {
        self.stream.reset();
    }

    /// Empties the stream's buffer and rewinds its cursor to 0.
    pub fn clear(&mut self) {
        self.stream.clear();
    }

    /// Writes `object`'s fields into the stream via its own routine.
    pub fn serialize(&mut self, object: &dyn TetherSerializable) -> Result<(), TetherDataError> {
        object.serialize(&mut self.stream)?;
        trace!(
            "Serialized object into stream ({} bytes used)",
            self.stream.get_number_of_bytes_used()
        );
        Ok(())
    }

    /// Reads `object`'s fields back from the stream via its own routine.
    pub fn deserialize(
        &mut self,
        object: &mut dyn TetherSerializable,
    ) -> Result<(), TetherDataError> {
        object.deserialize(&mut self.stream)?;
        trace!(
            "Deserialized object from stream (cursor at {} of {} bytes)",
            self.stream.get_cursor_position(),
            self.stream.get_number_of_bytes_used()
        );
        Ok(())
    }
}
