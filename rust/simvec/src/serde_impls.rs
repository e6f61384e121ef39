use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SimpleVector;

/// Serialized as a plain sequence of the live elements.
impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

/// The deserialized vector has capacity equal to its length.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for SimpleVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(SimpleVector::from_vec)
    }
}
