use crate::SerializeStream;
use tether_structures::TetherDataError;

/// Contract for values that write and read their own fields through a stream.
///
/// A conforming value writes its fields in a fixed, self-chosen order in
/// [`serialize`](TetherSerializable::serialize) and reads them back in that
/// exact same order in [`deserialize`](TetherSerializable::deserialize). The
/// implementing code is the de-facto schema; nothing on the wire identifies
/// fields or types. Implementations may invoke the `serialize`/`deserialize`
/// of nested conforming values, recursing arbitrarily deep, as long as both
/// sides traverse fields in the same order.
///
/// Stream errors propagate unchanged through nested calls via `?`; no layer
/// catches or translates them.
///
/// # Example
/// ```
/// use tether_serialization::{BinarySerializeStream, SerializeStream, TetherSerializable};
/// use tether_structures::{TetherDataError, Vector3};
///
/// #[derive(Default, PartialEq, Debug)]
/// struct Beacon {
///     label: String,
///     position: Vector3,
/// }
///
/// impl TetherSerializable for Beacon {
///     fn serialize(&self, stream: &mut dyn SerializeStream) -> Result<(), TetherDataError> {
///         stream.set_string(&self.label).set_vector3(self.position);
///         Ok(())
///     }
///
///     fn deserialize(&mut self, stream: &mut dyn SerializeStream) -> Result<(), TetherDataError> {
///         self.label = stream.try_get_string()?;
///         self.position = stream.try_get_vector3()?;
///         Ok(())
///     }
/// }
///
/// let source = Beacon { label: "north".into(), position: Vector3::new(0.0, 1.0, 0.0) };
/// let mut stream = BinarySerializeStream::new_empty();
/// source.serialize(&mut stream).unwrap();
///
/// let mut decoded = Beacon::default();
/// decoded.deserialize(&mut stream).unwrap();
/// assert_eq!(decoded, source);
/// ```
pub trait TetherSerializable {
    /// Writes this value's fields into the given stream in a fixed,
    /// value-defined order.
    fn serialize(&self, stream: &mut dyn SerializeStream) -> Result<(), TetherDataError>;

    /// Reads this value's fields back from the given stream in the same order
    /// they were written, replacing this value's state.
    fn deserialize(&mut self, stream: &mut dyn SerializeStream) -> Result<(), TetherDataError>;
}
