use tether_structures::{TetherDataError, Vector3};

/// Capability surface for typed read/write access to an encoded byte buffer.
///
/// Each supported primitive type has a paired set/get operation: setters append
/// the encoded representation of a value to the buffer, getters decode one
/// value starting at the current read cursor and advance the cursor by exactly
/// the value's encoded width. The trait commits to no particular encoding;
/// [`BinarySerializeStream`](crate::BinarySerializeStream) is the concrete
/// little-endian realization.
///
/// Setters return `&mut dyn SerializeStream` so consecutive writes chain:
///
/// ```rust
/// use tether_serialization::{BinarySerializeStream, SerializeStream};
///
/// let mut stream = BinarySerializeStream::new_empty();
/// stream.set_bool(true).set_i64(-1).set_f64(2.5);
/// ```
///
/// Getters return `Result` and fail with
/// [`TetherDataError::OutOfRange`] when fewer bytes remain past the cursor
/// than the requested type requires, leaving cursor and buffer untouched.
/// There is no partial-success state: a stream mid-read after a failure must
/// be reset or discarded before reuse.
///
/// A stream owns its buffer exclusively and is not thread-safe; confine each
/// instance to one logical owner at a time.
pub trait SerializeStream {
    /// Returns an independent copy of the buffer's current contents, safe for
    /// the caller to persist or transmit without aliasing stream state.
    fn get_byte_data(&self) -> Vec<u8>;

    /// Number of bytes currently held in the buffer.
    fn get_number_of_bytes_used(&self) -> usize;

    /// Current read cursor position within the buffer.
    fn get_cursor_position(&self) -> usize;

    /// Number of bytes between the cursor and the end of the buffer.
    fn get_number_of_bytes_remaining(&self) -> usize {
        self.get_number_of_bytes_used() - self.get_cursor_position()
    }

    /// Empties the buffer and rewinds the cursor to 0. Used to start writing a
    /// fresh message into an existing stream.
    fn clear(&mut self);

    /// Rewinds the cursor to 0 without touching buffer contents. Used to
    /// re-read an already populated buffer. Idempotent.
    fn reset(&mut self);

    /// Appends a boolean as a single byte (`1` for true, `0` for false).
    fn set_bool(&mut self, value: bool) -> &mut dyn SerializeStream;
    /// Decodes one boolean. Any nonzero byte decodes as `true`.
    fn try_get_bool(&mut self) -> Result<bool, TetherDataError>;

    /// Appends one raw byte.
    fn set_u8(&mut self, value: u8) -> &mut dyn SerializeStream;
    /// Decodes one raw byte.
    fn try_get_u8(&mut self) -> Result<u8, TetherDataError>;

    /// Appends a 16-bit signed integer (2 bytes).
    fn set_i16(&mut self, value: i16) -> &mut dyn SerializeStream;
    /// Decodes a 16-bit signed integer, advancing the cursor by 2 bytes.
    fn try_get_i16(&mut self) -> Result<i16, TetherDataError>;

    /// Appends a 32-bit signed integer (4 bytes).
    fn set_i32(&mut self, value: i32) -> &mut dyn SerializeStream;
    /// Decodes a 32-bit signed integer, advancing the cursor by 4 bytes.
    fn try_get_i32(&mut self) -> Result<i32, TetherDataError>;

    /// Appends a 64-bit signed integer (8 bytes).
    fn set_i64(&mut self, value: i64) -> &mut dyn SerializeStream;
    /// Decodes a 64-bit signed integer, advancing the cursor by 8 bytes.
    fn try_get_i64(&mut self) -> Result<i64, TetherDataError>;

    /// Appends a 32-bit IEEE-754 float (4 bytes).
    fn set_f32(&mut self, value: f32) -> &mut dyn SerializeStream;
    /// Decodes a 32-bit IEEE-754 float, advancing the cursor by 4 bytes.
    fn try_get_f32(&mut self) -> Result<f32, TetherDataError>;

    /// Appends a 64-bit IEEE-754 float (8 bytes).
    fn set_f64(&mut self, value: f64) -> &mut dyn SerializeStream;
    /// Decodes a 64-bit IEEE-754 float, advancing the cursor by 8 bytes.
    fn try_get_f64(&mut self) -> Result<f64, TetherDataError>;

    /// Appends a string as a 4-byte length prefix (UTF-8 **byte** count, not
    /// character count) followed by the raw UTF-8 bytes.
    fn set_string(&mut self, value: &str) -> &mut dyn SerializeStream;
    /// Decodes one length-prefixed UTF-8 string, advancing the cursor by
    /// `4 + byte length`. Fails with
    /// [`TetherDataError::InvalidEncoding`] if the prefixed bytes are not
    /// valid UTF-8, without advancing the cursor.
    fn try_get_string(&mut self) -> Result<String, TetherDataError>;

    /// Appends a [`Vector3`] as three consecutive 32-bit floats (X, Y, Z,
    /// 12 bytes total, no prefix).
    fn set_vector3(&mut self, value: Vector3) -> &mut dyn SerializeStream;
    /// Decodes one [`Vector3`], advancing the cursor by 12 bytes.
    fn try_get_vector3(&mut self) -> Result<Vector3, TetherDataError>;
}
