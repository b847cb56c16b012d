use crate::{
    format::SaveFormat,
    record::{RecordWriter, SavedRecord},
    SaveLoad,
};

/// Writes every field of `object` into a new record.
pub fn to_record<F: SaveFormat, T: SaveLoad>(object: &T) -> Result<SavedRecord, F::SerializeError> {
    let mut writer = RecordWriter::<F>::new(T::TYPE_NAME);
    object.save_fields(&mut writer)?;
    Ok(writer.finish())
}

/// Serializes `object` as a complete record.
pub fn save<F: SaveFormat, T: SaveLoad>(object: &T) -> Result<Vec<u8>, F::SerializeError> {
    let record = to_record::<F, T>(object)?;
    F::serialize(&record)
}
