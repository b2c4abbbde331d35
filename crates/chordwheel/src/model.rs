//! Incremental chord-graph model.
//!
//! This module provides the data model a chord wheel is built from. Items are
//! added one at a time; whenever a new item's value matches the value of
//! items already in the graph, a chord is created to each of them, and items
//! sharing a value are grouped into a category with a membership count.
//!
//! # Architecture
//!
//! The module provides:
//! - [`ChordGraph`]: The model itself, owning all items, categories, and chords
//! - [`Item`]: One inserted value with its insertion index and chord list
//! - [`Category`]: One distinct value with its members and count
//! - [`Chord`]: A weighted link between two matching items
//!
//! Matching is by canonical value: an item's value is rendered through
//! `Display` and interned as a [`Key`], and both chord creation and category
//! grouping compare that key. Any `T: Display` works as the item type.
//!
//! # Concurrency
//!
//! The model is single-writer and not internally synchronized. Hosts rebuild
//! it wholesale per logical update (clear, then re-add every token) and must
//! not interleave reads with a rebuild in progress. It is `Send`, so
//! multi-threaded hosts can move or swap whole instances, guarding the full
//! rebuild with one exclusion boundary of their own.

use std::fmt;

use chordwheel_core::identifier::{ChordId, ItemId, Key};
use indexmap::IndexMap;

/// One item loaded into the model.
///
/// An item keeps the value it was created from, its insertion index, and the
/// ids of every chord it participates in. The chord list only grows while the
/// item is in the model; everything else is fixed at creation.
#[derive(Debug, Clone)]
pub struct Item<T> {
    id: ItemId,
    index: usize,
    value: T,
    key: Key,
    chords: Vec<ChordId>,
}

impl<T> Item<T> {
    /// Returns the item's unique id within its graph
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item's insertion index, counting from zero with no gaps
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the stored value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the interned canonical key of the value
    pub fn key(&self) -> Key {
        self.key
    }

    /// Returns the ids of every chord this item participates in, in creation order
    pub fn chords(&self) -> &[ChordId] {
        &self.chords
    }
}

/// One distinct canonical value present in the model.
///
/// There is exactly one category per distinct key. It records how many items
/// carry that key and which ones, in insertion order.
#[derive(Debug, Clone)]
pub struct Category {
    key: Key,
    count: usize,
    members: Vec<ItemId>,
}

impl Category {
    /// Returns the canonical key this category groups
    pub fn key(&self) -> Key {
        self.key
    }

    /// Returns the number of items carrying this key, always at least 1
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the member item ids in insertion order
    pub fn members(&self) -> &[ItemId] {
        &self.members
    }
}

/// A link between two items whose values match.
///
/// `a` is always the pre-existing item and `b` the one whose insertion
/// created the chord, so `a` precedes `b` in insertion order. Chords are
/// never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    a: ItemId,
    b: ItemId,
    weight: f32,
}

impl Chord {
    /// Returns the pre-existing endpoint
    pub fn a(&self) -> ItemId {
        self.a
    }

    /// Returns the endpoint whose insertion created the chord
    pub fn b(&self) -> ItemId {
        self.b
    }

    /// Returns the chord weight
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

/// The chord-graph model: items, categories, and the chords between them.
///
/// Items with equal canonical values are pairwise connected: every insertion
/// links the new item to each earlier item of the same key, so k equal values
/// always form a complete clique of k·(k−1)/2 chords.
///
/// All collections iterate in insertion order, which is what makes layout
/// and color assignment deterministic downstream.
///
/// # Examples
///
/// ```
/// use chordwheel::model::ChordGraph;
///
/// let mut graph = ChordGraph::new();
/// for token in ["cat", "dog", "cat", "bird", "dog", "cat"] {
///     graph.add_item(token);
/// }
///
/// assert_eq!(graph.len(), 6);
/// assert_eq!(graph.chords().len(), 4);
/// assert_eq!(graph.categories().count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ChordGraph<T> {
    items: IndexMap<ItemId, Item<T>>,
    categories: IndexMap<Key, Category>,
    chords: Vec<Chord>,
    next_id: u64,
}

impl<T> ChordGraph<T>
where
    T: fmt::Display,
{
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            categories: IndexMap::new(),
            chords: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a new item to the model and links it to every matching item.
    ///
    /// The value's `Display` form is interned as its canonical key. One chord
    /// of weight 1.0 is created from each earlier item with the same key to
    /// the new item, registered with both endpoints, and the item joins its
    /// category (created on first encounter).
    ///
    /// Runs in O(k) over the k existing items with the same key.
    ///
    /// # Arguments
    ///
    /// * `value` - The value the new item represents
    ///
    /// # Returns
    ///
    /// The id assigned to the new item.
    pub fn add_item(&mut self, value: T) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        debug_assert!(
            !self.items.contains_key(&id),
            "Adding item: id {id} already exists"
        );

        let index = self.items.len();
        let key = Key::new(&value.to_string());

        let mut item = Item {
            id,
            index,
            value,
            key,
            chords: Vec::new(),
        };

        match self.categories.get_mut(&key) {
            Some(category) => {
                // Link the new item to every earlier member, oldest first.
                for &earlier in &category.members {
                    let chord_id = ChordId::new(self.chords.len() as u64);
                    self.chords.push(Chord {
                        a: earlier,
                        b: id,
                        weight: 1.0,
                    });
                    self.items[&earlier].chords.push(chord_id);
                    item.chords.push(chord_id);
                }
                category.members.push(id);
                category.count += 1;
            }
            None => {
                self.categories.insert(
                    key,
                    Category {
                        key,
                        count: 1,
                        members: vec![id],
                    },
                );
            }
        }

        self.items.insert(id, item);
        id
    }

    /// Empties the model.
    ///
    /// Items, categories, and chords are all removed and id assignment
    /// restarts, so a rebuild after `clear` behaves identically to a fresh
    /// instance. Calling `clear` on an empty model is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
        self.categories.clear();
        self.chords.clear();
        self.next_id = 0;
    }

    /// Returns an iterator over all items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item<T>> {
        self.items.values()
    }

    /// Returns the item with the given id, if it exists.
    pub fn item(&self, id: ItemId) -> Option<&Item<T>> {
        self.items.get(&id)
    }

    /// Returns the item with the given id without checking existence.
    ///
    /// # Panics
    /// Panics if the item id does not exist in the graph. Chord endpoints
    /// always exist, so resolving them through this accessor cannot panic.
    pub fn item_unchecked(&self, id: ItemId) -> &Item<T> {
        &self.items[&id]
    }

    /// Returns an iterator over all categories in first-encounter order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Returns the category for the given key, if any item carries it.
    pub fn category(&self, key: Key) -> Option<&Category> {
        self.categories.get(&key)
    }

    /// Returns all chords in creation order.
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Returns the chord with the given id, if it exists.
    pub fn chord(&self, id: ChordId) -> Option<&Chord> {
        self.chords.get(id.value() as usize)
    }

    /// Returns the number of items in the model.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the model holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ChordGraph<T>
where
    T: fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}
