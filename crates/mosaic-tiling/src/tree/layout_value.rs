//! Wire form of `MosaicLayout`: a tree, or `{}` for the empty layout.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{MosaicLayout, MosaicNode};

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyLayout {}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LayoutRepr {
    Tree(MosaicNode),
    Empty(EmptyLayout),
}

impl Serialize for MosaicLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.root() {
            Some(node) => node.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl<'de> Deserialize<'de> for MosaicLayout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Option::<LayoutRepr>::deserialize(deserializer)?;
        Ok(match repr {
            Some(LayoutRepr::Tree(node)) => MosaicLayout::from(node),
            Some(LayoutRepr::Empty(_)) | None => MosaicLayout::empty(),
        })
    }
}
