use xpoz_model::asset::Asset;
use xpoz_model::geometry::Size;

/// Anything the carousel can lay out: it only needs an intrinsic size.
pub trait Dimensioned {
    fn intrinsic_size(&self) -> Size;
}

impl Dimensioned for Asset {
    fn intrinsic_size(&self) -> Size {
        self.size()
    }
}

impl Dimensioned for Size {
    fn intrinsic_size(&self) -> Size {
        *self
    }
}
