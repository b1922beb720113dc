use std::cell::Cell;

/// A redraw request flag. Any number of requests made before the next paint collapse into a
/// single paint.
pub struct Dirty(Cell<bool>);

impl Dirty {
    pub fn smudged() -> Self {
        Self(Cell::new(true))
    }

    pub fn clean() -> Self {
        Self(Cell::new(false))
    }

    /// Mark the flag as dirty.
    pub fn smudge(&self) {
        self.0.replace(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.0.get()
    }

    /// Call `f` if the flag is dirty and clean it afterwards. Returns true if `f` was called.
    pub fn if_dirty(&self, mut f: impl FnMut()) -> bool {
        let changed = self.0.get();
        if changed {
            f();
            self.0.replace(false);
        }
        changed
    }
}

impl Default for Dirty {
    fn default() -> Self {
        Self::clean()
    }
}
