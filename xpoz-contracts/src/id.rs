use xpoz_model::asset::Asset;
use xpoz_model::ids::AssetUuid;

/// Records that expose a stable unique key.
///
/// The gallery list relies on this key for deduplication, so two records
/// with equal keys are considered the same item regardless of their other
/// fields.
pub trait Identifiable {
    type Key: Clone + Eq + std::fmt::Debug;

    fn key(&self) -> &Self::Key;
}

impl Identifiable for Asset {
    type Key = AssetUuid;

    fn key(&self) -> &AssetUuid {
        &self.uuid
    }
}
