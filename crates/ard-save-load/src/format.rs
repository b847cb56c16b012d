use serde::{de::DeserializeOwned, Serialize};

pub trait SaveFormat: Send + Sync {
    type SerializeError: std::error::Error + Send + Sync + 'static;
    type DeserializeError: std::error::Error + Send + Sync + 'static;

    fn serialize<T: Serialize + ?Sized>(object: &T) -> Result<Vec<u8>, Self::SerializeError>;

    fn deserialize<T: DeserializeOwned>(data: &[u8]) -> Result<T, Self::DeserializeError>;
}

/// Human readable format. Enumerations are stored by variant name.
pub struct Ron;

/// Compact binary format. Enumerations are stored by variant index.
pub struct Bincode;

impl SaveFormat for Ron {
    type SerializeError = ron::Error;
    type DeserializeError = ron::error::SpannedError;

    fn serialize<T: Serialize + ?Sized>(object: &T) -> Result<Vec<u8>, Self::SerializeError> {
        Ok(ron::ser::to_string(object)?.into())
    }

    fn deserialize<T: DeserializeOwned>(data: &[u8]) -> Result<T, Self::DeserializeError> {
        ron::de::from_bytes(data)
    }
}

impl SaveFormat for Bincode {
    type SerializeError = bincode::Error;
    type DeserializeError = bincode::Error;

    fn serialize<T: Serialize + ?Sized>(object: &T) -> Result<Vec<u8>, Self::SerializeError> {
        bincode::serialize(object)
    }

    fn deserialize<T: DeserializeOwned>(data: &[u8]) -> Result<T, Self::DeserializeError> {
        bincode::deserialize(data)
    }
}
