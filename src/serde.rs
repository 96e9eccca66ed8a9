use crate::{Comparator, LevelGenerator, SkipMap};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as a sequence of `(key, value)` pairs in key order.
impl<K: Serialize, V: Serialize, C, G> Serialize for SkipMap<K, V, C, G> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'de, K, V, C, G> Deserialize<'de> for SkipMap<K, V, C, G>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<K> + Default,
    G: LevelGenerator + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let eles: Vec<(K, V)> = Deserialize::deserialize(deserializer)?;
        let mut map = SkipMap::with_level_generator(C::default(), G::default());
        map.extend(eles);
        Ok(map)
    }
}
