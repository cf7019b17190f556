use crate::SerializeStream;
use byteorder::{ByteOrder, LittleEndian};
use std::mem::size_of;
use tether_structures::{TetherDataError, Vector3};

/// Number of bytes in a string's length prefix (UTF-8 byte count as a u32).
const STRING_LENGTH_PREFIX_BYTE_COUNT: usize = size_of::<u32>();

/// Encoded width of a [`Vector3`]: three consecutive f32 components.
const VECTOR3_BYTE_COUNT: usize = 3 * size_of::<f32>();

/// Growable byte buffer with a read cursor, realizing [`SerializeStream`] with
/// explicit little-endian encoding.
///
/// All multi-byte fields are encoded little-endian regardless of host byte
/// order, so buffers produced on one machine decode identically on any other.
/// Writes append at the end of the buffer; reads decode at the cursor and
/// advance it by exactly the decoded value's encoded width. The buffer is
/// owned exclusively by the stream and only ever observed by callers as a
/// copy via [`SerializeStream::get_byte_data`].
///
/// # Example
/// ```
/// use tether_serialization::{BinarySerializeStream, SerializeStream};
/// use tether_structures::Vector3;
///
/// let mut stream = BinarySerializeStream::new_empty();
/// stream
///     .set_i32(42)
///     .set_string("ok")
///     .set_vector3(Vector3::new(1.0, 2.0, 3.0));
///
/// assert_eq!(stream.try_get_i32().unwrap(), 42);
/// assert_eq!(stream.try_get_string().unwrap(), "ok");
/// assert_eq!(stream.try_get_vector3().unwrap(), Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(stream.get_cursor_position(), stream.get_number_of_bytes_used());
/// ```
pub struct BinarySerializeStream {
    bytes: Vec<u8>,
    cursor: usize,
}

impl BinarySerializeStream {
    /// Creates a stream with an empty buffer, ready for writing.
    pub fn new_empty() -> Self {
        Self {
            bytes: Vec::new(),
            cursor: 0,
        }
    }

    /// Creates an empty stream with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Creates a stream over an existing byte buffer, taking ownership of it.
    /// The cursor starts at 0, ready for reading.
    pub fn new_from_bytes(data: Vec<u8>) -> Self {
        Self {
            bytes: data,
            cursor: 0,
        }
    }

    /// Creates a stream by copying an existing byte slice.
    pub fn new_from_byte_slice(data: &[u8]) -> Self {
        Self {
            bytes: data.to_vec(),
            cursor: 0,
        }
    }

    /// Number of bytes currently allocated by the internal buffer.
    pub fn get_number_of_bytes_allocated(&self) -> usize {
        self.bytes.capacity()
    }

    /// Shrinks the internal allocation down to the bytes actually used.
    pub fn free_unused_allocation(&mut self) {
        self.bytes.shrink_to_fit()
    }

    /// Verifies `number_bytes_needed` bytes remain past the cursor before a
    /// read commits. Failure leaves cursor and buffer untouched.
    fn verify_readable(
        &self,
        number_bytes_needed: usize,
        reading_type: &'static str,
    ) -> Result<(), TetherDataError> {
        let bytes_remaining = self.bytes.len() - self.cursor;
        if number_bytes_needed > bytes_remaining {
            return Err(TetherDataError::OutOfRange(format!(
                "Reading a {} requires {} bytes, but only {} remain past cursor position {}!",
                reading_type, number_bytes_needed, bytes_remaining, self.cursor
            )));
        }
        Ok(())
    }

    fn push_f32(&mut self, value: f32) {
        let mut encoded = [0u8; size_of::<f32>()];
        LittleEndian::write_f32(&mut encoded, value);
        self.bytes.extend_from_slice(&encoded);
    }
}

impl Default for BinarySerializeStream {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl SerializeStream for BinarySerializeStream {
    fn get_byte_data(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    fn get_number_of_bytes_used(&self) -> usize {
        self.bytes.len()
    }

    fn get_cursor_position(&self) -> usize {
        self.cursor
    }

    fn clear(&mut self) {
        self.bytes.clear();
        self.cursor = 0;
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn set_bool(&mut self, value: bool) -> &mut dyn SerializeStream {
        self.bytes.push(value as u8);
        self
    }

    fn try_get_bool(&mut self) -> Result<bool, TetherDataError> {
        self.verify_readable(size_of::<u8>(), "bool")?;
        let value = self.bytes[self.cursor] != 0;
        self.cursor += size_of::<u8>();
        Ok(value)
    }

    fn set_u8(&mut self, value: u8) -> &mut dyn SerializeStream {
        self.bytes.push(value);
        self
    }

    fn try_get_u8(&mut self) -> Result<u8, TetherDataError> {
        self.verify_readable(size_of::<u8>(), "u8")?;
        let value = self.bytes[self.cursor];
        self.cursor += size_of::<u8>();
        Ok(value)
    }

    fn set_i16(&mut self, value: i16) -> &mut dyn SerializeStream {
        let mut encoded = [0u8; size_of::<i16>()];
        LittleEndian::write_i16(&mut encoded, value);
        self.bytes.extend_from_slice(&encoded);
        self
    }

    fn try_get_i16(&mut self) -> Result<i16, TetherDataError> {
        self.verify_readable(size_of::<i16>(), "i16")?;
        let value = LittleEndian::read_i16(&self.bytes[self.cursor..self.cursor + size_of::<i16>()]);
        self.cursor += size_of::<i16>();
        Ok(value)
    }

    fn set_i32(&mut self, value: i32) -> &mut dyn SerializeStream {
        let mut encoded = [0u8; size_of::<i32>()];
        LittleEndian::write_i32(&mut encoded, value);
        self.bytes.extend_from_slice(&encoded);
        self
    }

    fn try_get_i32(&mut self) -> Result<i32, TetherDataError> {
        self.verify_readable(size_of::<i32>(), "i32")?;
        let value = LittleEndian::read_i32(&self.bytes[self.cursor..self.cursor + size_of::<i32>()]);
        self.cursor += size_of::<i32>();
        Ok(value)
    }

    fn set_i64(&mut self, value: i64) -> &mut dyn SerializeStream {
        let mut encoded = [0u8; size_of::<i64>()];
        LittleEndian::write_i64(&mut encoded, value);
        self.bytes.extend_from_slice(&encoded);
        self
    }

    fn try_get_i64(&mut self) -> Result<i64, TetherDataError> {
        self.verify_readable(size_of::<i64>(), "i64")?;
        let value = LittleEndian::read_i64(&self.bytes[self.cursor..self.cursor + size_of::<i64>()]);
        self.cursor += size_of::<i64>();
        Ok(value)
    }

    fn set_f32(&mut self, value: f32) -> &mut dyn SerializeStream {
        self.push_f32(value);
        self
    }

    fn try_get_f32(&mut self) -> Result<f32, TetherDataError> {
        self.verify_readable(size_of::<f32>(), "f32")?;
        let value = LittleEndian::read_f32(&self.bytes[self.cursor..self.cursor + size_of::<f32>()]);
        self.cursor += size_of::<f32>();
        Ok(value)
    }

    fn set_f64(&mut self, value: f64) -> &mut dyn SerializeStream {
        let mut encoded = [0u8; size_of::<f64>()];
        LittleEndian::write_f64(&mut encoded, value);
        self.bytes.extend_from_slice(&encoded);
        self
    }

    fn try_get_f64(&mut self) -> Result<f64, TetherDataError> {
        self.verify_readable(size_of::<f64>(), "f64")?;
        let value = LittleEndian::read_f64(&self.bytes[self.cursor..self.cursor + size_of::<f64>()]);
        self.cursor += size_of::<f64>();
        Ok(value)
    }

    fn set_string(&mut self, value: &str) -> &mut dyn SerializeStream {
        // Prefix counts encoded UTF-8 bytes, not characters.
        let text_bytes = value.as_bytes();
        let mut prefix = [0u8; STRING_LENGTH_PREFIX_BYTE_COUNT];
        LittleEndian::write_u32(&mut prefix, text_bytes.len() as u32);
        self.bytes.extend_from_slice(&prefix);
        self.bytes.extend_from_slice(text_bytes);
        self
    }

    fn try_get_string(&mut self) -> Result<String, TetherDataError> {
        self.verify_readable(STRING_LENGTH_PREFIX_BYTE_COUNT, "string length prefix")?;
        let text_byte_count = LittleEndian::read_u32(
            &self.bytes[self.cursor..self.cursor + STRING_LENGTH_PREFIX_BYTE_COUNT],
        ) as usize;

        let bytes_remaining_past_prefix =
            self.bytes.len() - self.cursor - STRING_LENGTH_PREFIX_BYTE_COUNT;
        if text_byte_count > bytes_remaining_past_prefix {
            return Err(TetherDataError::OutOfRange(format!(
                "String length prefix claims {} bytes, but only {} remain past the prefix at cursor position {}!",
                text_byte_count, bytes_remaining_past_prefix, self.cursor
            )));
        }

        let text_start = self.cursor + STRING_LENGTH_PREFIX_BYTE_COUNT;
        let value = std::str::from_utf8(&self.bytes[text_start..text_start + text_byte_count])
            .map_err(|utf8_error| {
                TetherDataError::InvalidEncoding(format!(
                    "String bytes at cursor position {} are not valid UTF-8: {}!",
                    text_start, utf8_error
                ))
            })?
            .to_string();

        self.cursor = text_start + text_byte_count;
        Ok(value)
    }

    fn set_vector3(&mut self, value: Vector3) -> &mut dyn SerializeStream {
        self.push_f32(value.x);
        self.push_f32(value.y);
        self.push_f32(value.z);
        self
    }

    fn try_get_vector3(&mut self) -> Result<Vector3, TetherDataError> {
        // Verified as one 12-byte unit so a short buffer leaves the cursor
        // untouched rather than stranded after a partial component read.
        self.verify_readable(VECTOR3_BYTE_COUNT, "Vector3")?;
        let x = LittleEndian::read_f32(&self.bytes[self.cursor..self.cursor + size_of::<f32>()]);
        let y = LittleEndian::read_f32(
            &self.bytes[self.cursor + size_of::<f32>()..self.cursor + 2 * size_of::<f32>()],
        );
        let z = LittleEndian::read_f32(
            &self.bytes[self.cursor + 2 * size_of::<f32>()..self.cursor + VECTOR3_BYTE_COUNT],
        );
        self.cursor += VECTOR3_BYTE_COUNT;
        Ok(Vector3::new(x, y, z))
    }
}
