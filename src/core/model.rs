use serde::ser::{Serialize, SerializeMap, Serializer};

/// One resolved CRS: which registry answered, the normalized identifier,
/// its display name and the projection definition in the requested format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub source: &'static str,
    pub crs: String,
    pub name: String,
    pub format: String,
    pub definition: String,
}

/// The wire shape keys the definition by the requested format:
/// `{"source": …, "crs": …, "name": …, "<format>": "<definition>"}`.
impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("source", self.source)?;
        map.serialize_entry("crs", &self.crs)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry(&self.format, &self.definition)?;
        map.end()
    }
}
