use ard_log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::format::SaveFormat;

/// A persisted object as an ordered list of named fields. Fields appear in the order they were
/// first written, so fields of an enclosing type precede fields written after them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub type_name: String,
    pub fields: Vec<SavedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedField {
    pub name: String,
    pub raw: Vec<u8>,
}

pub struct RecordWriter<F: SaveFormat> {
    record: SavedRecord,
    _format: std::marker::PhantomData<F>,
}

pub struct RecordReader<'a, F: SaveFormat> {
    record: &'a SavedRecord,
    index: FxHashMap<&'a str, usize>,
    _format: std::marker::PhantomData<F>,
}

impl SavedRecord {
    #[inline(always)]
    pub fn field(&self, name: &str) -> Option<&SavedField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl<F: SaveFormat> RecordWriter<F> {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            record: SavedRecord {
                type_name: type_name.into(),
                fields: Vec::default(),
            },
            _format: Default::default(),
        }
    }

    /// Writes a named field. Values equal to `default` are left out of the record, so readers
    /// get them back through their own default.
    ///
    /// Writing a name twice replaces the earlier value in place.
    pub fn write<T: Serialize + PartialEq>(
        &mut self,
        name: &str,
        value: &T,
        default: &T,
    ) -> Result<(), F::SerializeError> {
        if value == default {
            self.record.fields.retain(|field| field.name != name);
            return Ok(());
        }

        let raw = F::serialize(value)?;
        trace!("writing field `{name}` of `{}`", self.record.type_name);

        match self
            .record
            .fields
            .iter_mut()
            .find(|field| field.name == name)
        {
            Some(field) => field.raw = raw,
            None => self.record.fields.push(SavedField {
                name: name.to_owned(),
                raw,
            }),
        }

        Ok(())
    }

    #[inline(always)]
    pub fn finish(self) -> SavedRecord {
        self.record
    }
}

impl<'a, F: SaveFormat> RecordReader<'a, F> {
    pub fn new(record: &'a SavedRecord) -> Self {
        let mut index = FxHashMap::default();
        record.fields.iter().enumerate().for_each(|(i, field)| {
            index.entry(field.name.as_str()).or_insert(i);
        });

        Self {
            record,
            index,
            _format: Default::default(),
        }
    }

    #[inline(always)]
    pub fn type_name(&self) -> &str {
        &self.record.type_name
    }

    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Reads a named field, or returns `default` if the record has no field with that name.
    pub fn read<T: DeserializeOwned>(
        &self,
        name: &str,
        default: T,
    ) -> Result<T, F::DeserializeError> {
        match self.index.get(name) {
            Some(idx) => F::deserialize(&self.record.fields[*idx].raw),
            None => {
                debug!(
                    "field `{name}` missing from `{}`, using default",
                    self.record.type_name
                );
                Ok(default)
            }
        }
    }
}
