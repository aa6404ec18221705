//! Configuration
//!
//! Folds a flat add-on selection into a grouped multiset and derives the
//! composite line id. Display order (first seen) and identity order (sorted)
//! are kept separate: only [`AddOnGroups::signature`] sorts.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    cart::lines::{LineId, SelectedAddOn},
    menu::{AddOn, MenuItem, Variation},
};

/// Sentinel used in a line id when no variation is selected.
pub const NO_VARIATION: &str = "no-variation";

/// Sentinel used in a line id when no add-ons are selected.
pub const NO_ADD_ONS: &str = "no-addons";

/// Add-ons grouped by id, with the number of times each was selected.
#[derive(Debug, Default)]
pub struct AddOnGroups<'a> {
    groups: SmallVec<[(&'a AddOn, u32); 4]>,
}

impl<'a> AddOnGroups<'a> {
    /// Groups a flat per-unit add-on list. Groups follow first-occurrence order and keep
    /// the first occurrence's snapshot.
    pub fn from_flat(add_ons: &'a [AddOn]) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();

        let groups = add_ons.iter().fold(
            SmallVec::<[(&'a AddOn, u32); 4]>::new(),
            |mut groups, add_on| {
                match index.get(add_on.id.as_str()) {
                    Some(&at) => {
                        if let Some((_, count)) = groups.get_mut(at) {
                            *count += 1;
                        }
                    }
                    None => {
                        index.insert(add_on.id.as_str(), groups.len());
                        groups.push((add_on, 1));
                    }
                }

                groups
            },
        );

        Self { groups }
    }

    /// Iterate over the groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a AddOn, u32)> + '_ {
        self.groups.iter().copied()
    }

    /// Number of distinct add-ons.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no add-ons were selected.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Canonical signature: `<id>-<count>` entries sorted lexicographically and joined
    /// with `,`, or [`NO_ADD_ONS`] when empty.
    pub fn signature(&self) -> String {
        if self.groups.is_empty() {
            return NO_ADD_ONS.to_string();
        }

        let mut entries: SmallVec<[String; 4]> = self
            .groups
            .iter()
            .map(|(add_on, count)| format!("{}-{count}", add_on.id))
            .collect();

        entries.sort_unstable();
        entries.join(",")
    }

    /// Owned snapshots for storage on a cart line, in first-seen order.
    pub fn to_selected(&self) -> SmallVec<[SelectedAddOn; 4]> {
        self.groups
            .iter()
            .map(|&(add_on, quantity)| SelectedAddOn {
                add_on: add_on.clone(),
                quantity,
            })
            .collect()
    }
}

/// Derives the composite id for an item configuration.
pub fn line_id(
    item: &MenuItem,
    variation: Option<&Variation>,
    add_ons: &AddOnGroups<'_>,
) -> LineId {
    let variation = variation.map_or(NO_VARIATION, |variation| variation.id.as_str());

    LineId::new(format!("{}-{variation}-{}", item.id, add_ons.signature()))
}
