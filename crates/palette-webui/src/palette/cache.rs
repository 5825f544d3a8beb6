use super::ColorSwatch;
use hashbrown::HashMap;
use std::{cell::RefCell, rc::Rc};

/// Identifies a palette by its saturation/lightness pair, e.g. `75-60`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{saturation}-{lightness}")]
pub struct CacheKey {
    pub saturation: u8,
    pub lightness: u8,
}

impl CacheKey {
    pub fn new(saturation: u8, lightness: u8) -> Self {
        Self {
            saturation,
            lightness,
        }
    }
}

/// Completed palettes, kept for the lifetime of the application.
///
/// Cloning yields another handle to the same store. Entries are never evicted.
#[derive(Clone, Default)]
pub struct PaletteCache(Rc<RefCell<HashMap<CacheKey, Rc<[ColorSwatch]>>>>);

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Rc<[ColorSwatch]>> {
        self.0.borrow().get(key).cloned()
    }

    /// Stores a palette, replacing any earlier entry under the same key.
    pub fn insert(&self, key: CacheKey, swatches: Rc<[ColorSwatch]>) {
        self.0.borrow_mut().insert(key, swatches);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl PartialEq for PaletteCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
