//! Variable identity.
//!
//! Every assignment variable gets a [`VarTag`] when the model is assembled.
//! Tags are dense (`0..n`) and the table maps them both ways, so decoding a
//! solved value never depends on a solver-generated variable name.

use std::collections::HashMap;

use sp_core::{PeriodId, ShiftId, VarTag};

/// Bidirectional `VarTag ↔ (ShiftId, start PeriodId)` mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagTable {
    pairs: Vec<(ShiftId, PeriodId)>,
    index: HashMap<(ShiftId, PeriodId), VarTag>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the tag for `(shift, start)`.  Issuing the same pair twice
    /// returns the existing tag.
    pub fn issue(&mut self, shift: ShiftId, start: PeriodId) -> VarTag {
        if let Some(&tag) = self.index.get(&(shift, start)) {
            return tag;
        }
        let tag = VarTag(self.pairs.len() as u32);
        self.pairs.push((shift, start));
        self.index.insert((shift, start), tag);
        tag
    }

    /// The `(shift, start)` pair a tag was issued for.
    #[inline]
    pub fn pair(&self, tag: VarTag) -> Option<(ShiftId, PeriodId)> {
        self.pairs.get(tag.index()).copied()
    }

    /// The tag issued for `(shift, start)`, if any.
    #[inline]
    pub fn tag(&self, shift: ShiftId, start: PeriodId) -> Option<VarTag> {
        self.index.get(&(shift, start)).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All tags in issue order with their pairs.
    pub fn iter(&self) -> impl Iterator<Item = (VarTag, ShiftId, PeriodId)> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, &(s, p))| (VarTag(i as u32), s, p))
    }
}
