use thiserror::Error;

use crate::{
    format::SaveFormat,
    record::{RecordReader, SavedRecord},
    SaveLoad,
};

#[derive(Debug, Error)]
pub enum LoadError<E: std::error::Error + 'static> {
    #[error("deserialization error: {0}")]
    Format(#[from] E),
    #[error("expected a `{expected}` record but found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

/// Reads the fields of `record` into an existing object. Fields missing from the record keep
/// whatever default the object's `load_fields` substitutes. `object` is left untouched if any
/// field fails to load.
pub fn from_record<F: SaveFormat, T: SaveLoad + Clone>(
    object: &mut T,
    record: &SavedRecord,
) -> Result<(), LoadError<F::DeserializeError>> {
    if record.type_name != T::TYPE_NAME {
        return Err(LoadError::TypeMismatch {
            expected: T::TYPE_NAME,
            found: record.type_name.clone(),
        });
    }

    let reader = RecordReader::<F>::new(record);
    let mut loaded = object.clone();
    loaded.load_fields(&reader)?;
    *object = loaded;
    Ok(())
}

/// Deserializes a record and loads it into `object`.
pub fn load_into<F: SaveFormat, T: SaveLoad + Clone>(
    object: &mut T,
    data: &[u8],
) -> Result<(), LoadError<F::DeserializeError>> {
    let record = F::deserialize::<SavedRecord>(data)?;
    from_record::<F, T>(object, &record)
}

/// Deserializes a record into a default constructed object.
pub fn load<F: SaveFormat, T: SaveLoad + Default + Clone>(
    data: &[u8],
) -> Result<T, LoadError<F::DeserializeError>> {
    let mut object = T::default();
    load_into::<F, T>(&mut object, data)?;
    Ok(object)
}
