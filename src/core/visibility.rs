/// What to do with the nav's visible-state class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassChange {
    Add,
    Remove,
}

/// The nav sticks (class added) only while the hero is out of view.
#[inline]
pub fn nav_class_change(hero_intersecting: bool) -> ClassChange {
    if hero_intersecting {
        ClassChange::Remove
    } else {
        ClassChange::Add
    }
}

/// Fold a batch of intersection flags into the change left applied once the
/// whole batch has been processed.
pub fn settle(flags: impl IntoIterator<Item = bool>) -> Option<ClassChange> {
    flags.into_iter().map(nav_class_change).last()
}
