use crate::core::{Cart, Skip, SkipId};

/// Core selector domain state grouped for engine orchestration.
///
/// The catalog is replaced wholesale by successful loads; the cart is the
/// only other mutable piece and changes one operation at a time.
pub struct SelectorModel {
    pub(super) catalog: Vec<Skip>,
    pub(super) cart: Cart,
}

impl SelectorModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            cart: Cart::new(),
        }
    }

    pub(super) fn skip_by_id(&self, id: SkipId) -> Option<&Skip> {
        self.catalog.iter().find(|skip| skip.id == id)
    }
}

impl Default for SelectorModel {
    fn default() -> Self {
        Self::new()
    }
}
