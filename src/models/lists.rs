//! Need and want lists
//!
//! The need list is an unordered bag of cost items; the want list is ordered
//! by priority with index 0 as the most wanted item. Both expose positional
//! operations at their boundary, but resolve a position to the item's stable
//! [`ItemId`] before mutating, so the removal itself is keyed by identity.

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::item::CostItem;
use super::money::Money;
use crate::error::{BuddyError, BuddyResult};

/// Shared storage and positional bookkeeping for both lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct ItemSeq {
    items: Vec<CostItem>,
}

impl ItemSeq {
    fn push(&mut self, name: &str, cost: Money) -> BuddyResult<CostItem> {
        let item =
            CostItem::try_new(name, cost).map_err(|e| BuddyError::Validation(e.to_string()))?;
        self.total()?.checked_add(item.cost).ok_or_else(|| {
            BuddyError::amount_out_of_range(format!("adding {} to the list total", item.cost))
        })?;
        self.items.push(item.clone());
        Ok(item)
    }

    fn id_at(&self, list: &'static str, index: usize) -> BuddyResult<ItemId> {
        self.items
            .get(index)
            .map(|item| item.id)
            .ok_or_else(|| BuddyError::item_index(list, index, self.items.len()))
    }

    fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn remove_at(&mut self, list: &'static str, index: usize) -> BuddyResult<CostItem> {
        let id = self.id_at(list, index)?;
        let position = self
            .position_of(id)
            .ok_or_else(|| BuddyError::item_index(list, index, self.items.len()))?;
        Ok(self.items.remove(position))
    }

    fn total(&self) -> BuddyResult<Money> {
        Money::checked_sum(self.items.iter().map(|item| item.cost))
            .ok_or_else(|| BuddyError::amount_out_of_range("item costs do not fit in one total"))
    }
}

/// Unordered collection of necessary expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeedList {
    seq: ItemSeq,
}

impl NeedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a need
    ///
    /// Fails with a validation error if the name is empty or the cost negative.
    /// Identical entries are kept as distinct items.
    pub fn add(&mut self, name: &str, cost: Money) -> BuddyResult<CostItem> {
        self.seq.push(name, cost)
    }

    /// Remove the need at `index`; later items shift down by one
    pub fn delete(&mut self, index: usize) -> BuddyResult<CostItem> {
        self.seq.remove_at("need", index)
    }

    pub fn get(&self, index: usize) -> Option<&CostItem> {
        self.seq.items.get(index)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.seq.position_of(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CostItem> {
        self.seq.items.iter()
    }

    pub fn len(&self) -> usize {
        self.seq.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.items.is_empty()
    }

    /// Sum of all need costs
    ///
    /// Fails with a validation error if the sum does not fit in cents.
    pub fn total(&self) -> BuddyResult<Money> {
        self.seq.total()
    }
}

/// Wants ordered by priority, highest priority first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WantList {
    seq: ItemSeq,
}

impl WantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a want at the lowest priority
    pub fn add(&mut self, name: &str, cost: Money) -> BuddyResult<CostItem> {
        self.seq.push(name, cost)
    }

    /// Remove the want at `index`; lower-priority items move up by one
    pub fn delete(&mut self, index: usize) -> BuddyResult<CostItem> {
        self.seq.remove_at("want", index)
    }

    /// Swap the wants at positions `a` and `b`
    ///
    /// Both indices are checked before anything moves, so the list is either
    /// swapped or untouched. Swapping a position with itself is a no-op.
    pub fn reorder(&mut self, a: usize, b: usize) -> BuddyResult<()> {
        let len = self.seq.items.len();
        for index in [a, b] {
            if index >= len {
                return Err(BuddyError::item_index("want", index, len));
            }
        }
        if a != b {
            self.seq.items.swap(a, b);
        }
        Ok(())
    }

    /// The highest-priority want, if any
    pub fn top(&self) -> Option<&CostItem> {
        self.seq.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&CostItem> {
        self.seq.items.get(index)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.seq.position_of(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CostItem> {
        self.seq.items.iter()
    }

    pub fn len(&self) -> usize {
        self.seq.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.items.is_empty()
    }

    /// Sum of all want costs
    pub fn total(&self) -> BuddyResult<Money> {
        self.seq.total()
    }
}

impl<'a> IntoIterator for &'a NeedList {
    type Item = &'a CostItem;
    type IntoIter = std::slice::Iter<'a, CostItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a WantList {
    type Item = &'a CostItem;
    type IntoIter = std::slice::Iter<'a, CostItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    fn sorted_contents(wants: &WantList) -> Vec<(uuid::Uuid, String, i64)> {
        let mut v: Vec<_> = wants
            .iter()
            .map(|i| (*i.id.as_uuid(), i.name.clone(), i.cost.cents()))
            .collect();
        v.sort();
        v
    }

    #[test]
    fn test_add_need_and_total() {
        let mut needs = NeedList::new();
        needs.add("rent", dollars(1200)).unwrap();
        needs.add("groceries", dollars(300)).unwrap();

        assert_eq!(needs.len(), 2);
        assert_eq!(needs.total().unwrap(), dollars(1500));
    }

    #[test]
    fn test_add_rejects_invalid_items() {
        let mut wants = WantList::new();

        let err = wants.add("", dollars(10)).unwrap_err();
        assert!(err.is_validation());

        let err = wants.add("book", Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());

        assert!(wants.is_empty());
    }

    #[test]
    fn test_add_rejects_cost_that_overflows_total() {
        let huge = Money::parse("90000000000000000").unwrap();
        let mut needs = NeedList::new();
        needs.add("castle", huge).unwrap();

        let err = needs.add("second castle", huge).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("amount out of range"));
        assert_eq!(needs.len(), 1);
        assert_eq!(needs.total().unwrap(), huge);
    }

    #[test]
    fn test_total_of_loaded_list_reports_overflow() {
        let json = format!(
            r#"[{{"id":"{}","name":"a","cost":{}}},{{"id":"{}","name":"b","cost":{}}}]"#,
            uuid::Uuid::new_v4(),
            i64::MAX,
            uuid::Uuid::new_v4(),
            i64::MAX
        );
        let needs: NeedList = serde_json::from_str(&json).unwrap();
        assert!(needs.total().unwrap_err().is_validation());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut needs = NeedList::new();
        let a = needs.add("bus pass", dollars(60)).unwrap();
        let b = needs.add("bus pass", dollars(60)).unwrap();

        assert_eq!(needs.len(), 2);
        assert_ne!(a.id, b.id);
        assert_eq!(needs.total().unwrap(), dollars(120));
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut needs = NeedList::new();
        needs.add("rent", dollars(1200)).unwrap();

        let err = needs.delete(1).unwrap_err();
        assert!(matches!(
            err,
            BuddyError::Index {
                list: "need",
                index: 1,
                len: 1
            }
        ));
        assert_eq!(needs.len(), 1);
    }

    #[test]
    fn test_delete_shifts_later_indices() {
        let mut wants = WantList::new();
        let laptop = wants.add("laptop", dollars(1000)).unwrap();
        let book = wants.add("book", dollars(20)).unwrap();
        let bike = wants.add("bike", dollars(400)).unwrap();

        assert_eq!(wants.position_of(bike.id), Some(2));

        let removed = wants.delete(0).unwrap();
        assert_eq!(removed.id, laptop.id);

        assert_eq!(wants.position_of(book.id), Some(0));
        assert_eq!(wants.position_of(bike.id), Some(1));
        assert_eq!(wants.position_of(laptop.id), None);

        // The old index of the last item is no longer valid
        assert!(wants.delete(2).is_err());
    }

    #[test]
    fn test_readding_equal_item_lands_at_end() {
        let mut wants = WantList::new();
        wants.add("laptop", dollars(1000)).unwrap();
        wants.add("book", dollars(20)).unwrap();
        wants.add("bike", dollars(400)).unwrap();

        let removed = wants.delete(0).unwrap();
        let readded = wants.add(&removed.name, removed.cost).unwrap();

        assert!(readded.same_contents(&removed));
        assert_ne!(readded.id, removed.id);
        assert_eq!(wants.position_of(readded.id), Some(2));
        assert_eq!(wants.get(0).unwrap().name, "book");
    }

    #[test]
    fn test_reorder_swaps() {
        let mut wants = WantList::new();
        wants.add("laptop", dollars(1000)).unwrap();
        wants.add("book", dollars(20)).unwrap();
        wants.add("bike", dollars(400)).unwrap();

        wants.reorder(0, 2).unwrap();

        let names: Vec<_> = wants.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["bike", "book", "laptop"]);
        assert_eq!(wants.top().unwrap().name, "bike");
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut wants = WantList::new();
        wants.add("laptop", dollars(1000)).unwrap();
        wants.add("book", dollars(20)).unwrap();
        let before = wants.clone();

        wants.reorder(1, 1).unwrap();
        assert_eq!(wants, before);
    }

    #[test]
    fn test_reorder_out_of_range_leaves_list_untouched() {
        let mut wants = WantList::new();
        wants.add("laptop", dollars(1000)).unwrap();
        wants.add("book", dollars(20)).unwrap();
        let before = wants.clone();

        assert!(matches!(
            wants.reorder(0, 5),
            Err(BuddyError::Index { index: 5, .. })
        ));
        assert!(matches!(
            wants.reorder(7, 1),
            Err(BuddyError::Index { index: 7, .. })
        ));
        assert_eq!(wants, before);
    }

    #[test]
    fn test_reorder_sequences_are_permutations() {
        let mut wants = WantList::new();
        for i in 0..7 {
            wants.add(&format!("want {}", i % 3), dollars(10 * (i % 4))).unwrap();
        }
        let before = sorted_contents(&wants);

        // Deterministic pseudo-random swap sequence
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let a = ((seed >> 33) % 7) as usize;
            let b = ((seed >> 17) % 7) as usize;
            wants.reorder(a, b).unwrap();
            assert_eq!(sorted_contents(&wants), before);
        }
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut needs = NeedList::new();
        needs.add("rent", dollars(1200)).unwrap();

        let json = serde_json::to_value(&needs).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "rent");
        assert_eq!(json[0]["cost"], 120000);

        let back: NeedList = serde_json::from_value(json).unwrap();
        assert_eq!(back, needs);
    }
}
