use std::collections::HashSet;

use crate::catalogs::MAX_DIAGRAM_SETS;
use crate::types::{dedup_categories, Category, FilterSpec, Item, Partition, Region};

impl FilterSpec {
    /// The selection fed to the diagram: intersection categories first,
    /// then union categories, deduplicated.
    pub fn selected(&self) -> Vec<Category> {
        dedup_categories(
            self.intersect_all()
                .iter()
                .chain(self.union_any())
                .cloned()
                .collect(),
        )
    }
}

/// Decompose a collection over a category selection into Venn regions.
///
/// The selected categories become bit positions `0..k`. Every non-empty
/// bitmask yields a layout region (cumulative count of items with all "on"
/// categories) and, when inhabited, a disjoint region (items with all "on"
/// categories and none of the "off" ones; non-selected categories on an
/// item are irrelevant). Disjoint member names are sorted for display.
///
/// Refusals: empty selection, or more than [`MAX_DIAGRAM_SETS`] categories
/// after deduplication. All layout regions empty is reported as
/// [`Partition::Degenerate`] so the caller can surface an explicit empty
/// state instead of a blank diagram.
pub fn partition(items: &[Item], selection: &[Category]) -> Partition {
    let selected = dedup_categories(selection.to_vec());
    let k = selected.len();
    if k == 0 {
        return Partition::NoSelection;
    }
    if k > MAX_DIAGRAM_SETS {
        return Partition::OverCapacity { selected: k };
    }

    // One transient membership id-set per selected category.
    let memberships: Vec<HashSet<u32>> = selected
        .iter()
        .map(|c| {
            items
                .iter()
                .filter(|i| i.categories.contains(c))
                .map(|i| i.id)
                .collect()
        })
        .collect();

    let mut layout: Vec<Region> = Vec::new();
    let mut disjoint: Vec<Region> = Vec::new();
    for mask in 1usize..(1 << k) {
        let on: Vec<usize> = (0..k).filter(|j| (mask >> j) & 1 == 1).collect();
        let categories: Vec<Category> = on.iter().map(|&j| selected[j].clone()).collect();

        let cumulative: Vec<&Item> = items
            .iter()
            .filter(|i| on.iter().all(|&j| memberships[j].contains(&i.id)))
            .collect();
        layout.push(Region {
            categories: categories.clone(),
            size: cumulative.len(),
            members: None,
        });

        let exact: Vec<&Item> = cumulative
            .into_iter()
            .filter(|i| {
                (0..k)
                    .filter(|j| (mask >> j) & 1 == 0)
                    .all(|j| !memberships[j].contains(&i.id))
            })
            .collect();
        if !exact.is_empty() {
            let mut members: Vec<String> = exact.iter().map(|i| i.name.clone()).collect();
            members.sort();
            disjoint.push(Region {
                categories,
                size: exact.len(),
                members: Some(members),
            });
        }
    }

    if layout.iter().all(|r| r.size == 0) {
        return Partition::Degenerate;
    }
    Partition::Regions { layout, disjoint }
}

/// Look up a region by set equality: same length, same members, any order.
/// Never positional — the rendering layer controls shape enumeration order.
pub fn find_region<'a>(regions: &'a [Region], query: &[Category]) -> Option<&'a Region> {
    regions.iter().find(|r| {
        r.categories.len() == query.len() && r.categories.iter().all(|c| query.contains(c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, categories: &[&str]) -> Item {
        Item {
            id,
            name: name.into(),
            categories: categories.iter().map(|c| (*c).into()).collect(),
        }
    }

    fn cats(labels: &[&str]) -> Vec<Category> {
        labels.iter().map(|c| (*c).into()).collect()
    }

    #[test]
    fn empty_selection_is_a_refusal() {
        let result = partition(&[item(1, "bulbasaur", &["grass"])], &[]);
        assert_eq!(result, Partition::NoSelection);
        assert!(result.is_refusal());
    }

    #[test]
    fn five_categories_is_a_refusal() {
        let selection = cats(&["fire", "water", "grass", "ice", "rock"]);
        let result = partition(&[], &selection);
        assert_eq!(result, Partition::OverCapacity { selected: 5 });
        assert!(result.is_refusal());
    }

    #[test]
    fn duplicate_selection_entries_count_once() {
        let items = vec![item(4, "charmander", &["fire"])];
        let selection = cats(&["fire", "fire", "fire", "fire", "fire"]);
        let result = partition(&items, &selection);
        let (layout, _) = result.regions().expect("one real category");
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn no_inhabited_region_is_degenerate() {
        let items = vec![item(25, "pikachu", &["electric"])];
        let result = partition(&items, &cats(&["dragon"]));
        assert_eq!(result, Partition::Degenerate);
        assert!(!result.is_refusal());
    }

    #[test]
    fn find_region_ignores_order() {
        let regions = vec![Region {
            categories: cats(&["fire", "water"]),
            size: 1,
            members: None,
        }];
        assert!(find_region(&regions, &cats(&["water", "fire"])).is_some());
        assert!(find_region(&regions, &cats(&["fire"])).is_none());
        assert!(find_region(&regions, &cats(&["water", "grass"])).is_none());
    }
}
