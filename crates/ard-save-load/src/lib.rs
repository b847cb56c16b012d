use format::SaveFormat;
use record::{RecordReader, RecordWriter};

pub mod format;
pub mod loader;
pub mod record;
pub mod saver;


pub mod prelude {
    pub use crate::{
        format::*,
        loader::{load, load_into, LoadError},
        record::*,
        saver::save,
        SaveLoad,
    };
}

/// A type that persists itself as a record of named fields.
///
/// Types composed of other persisted parts write the enclosing parts first, then their own
/// fields, and read them back in the same order.
pub trait SaveLoad {
    /// Name stored in the record. Loading a record with a different name fails.
    const TYPE_NAME: &'static str;

    fn save_fields<F: SaveFormat>(&self, writer: &mut RecordWriter<F>)
        -> Result<(), F::SerializeError>;

    fn load_fields<F: SaveFormat>(
        &mut self,
        reader: &RecordReader<F>,
    ) -> Result<(), F::DeserializeError>;
}
