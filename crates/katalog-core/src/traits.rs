use crate::fields::FieldTable;

/// A catalog record with translated text fields.
///
/// Implementors build their [`FieldTable`] once (typically in a
/// `std::sync::OnceLock`) and hand out the same table on every call.
pub trait Translatable: Sized + 'static {
    /// The registered translated fields of this entity type.
    fn field_table() -> &'static FieldTable<Self>;
}
