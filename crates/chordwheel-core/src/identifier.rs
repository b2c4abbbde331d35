//! Identifier types for graph entities.
//!
//! This module provides [`Key`], an interned canonical string identifier used
//! for category grouping and color assignment, plus the opaque [`ItemId`] and
//! [`ChordId`] handles a graph hands out for its entities.
//!
//! Interning keeps key comparison and hashing cheap no matter how long the
//! underlying token text is, which matters because every insertion compares
//! the new token's key against existing categories.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for canonical key storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Interned canonical identifier for a category of equal-valued items.
///
/// Two keys created from equal strings are equal and hash identically, so a
/// `Key` works directly as a map key for category lookup and color caches.
///
/// # Examples
///
/// ```
/// use chordwheel_core::identifier::Key;
///
/// let cat1 = Key::new("cat");
/// let cat2 = Key::new("cat");
/// let dog = Key::new("dog");
///
/// assert_eq!(cat1, cat2);
/// assert_ne!(cat1, dog);
/// assert_eq!(cat1, "cat");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(DefaultSymbol);

impl Key {
    /// Creates a `Key` from &str, interning the string on first use.
    ///
    /// # Arguments
    ///
    /// * `name` - The canonical string form of the value
    ///
    /// # Examples
    ///
    /// ```
    /// use chordwheel_core::identifier::Key;
    ///
    /// let key = Key::new("bird");
    /// assert_eq!(key.to_string(), "bird");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Key {
    /// Creates a `Key` from a string slice
    ///
    /// This is a convenience implementation that calls `Key::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordwheel_core::identifier::Key;
    ///
    /// let key: Key = "example".into();
    /// assert_eq!(key, "example");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Key {
    /// Allows direct comparison with string slices: `key == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use chordwheel_core::identifier::Key;
    ///
    /// let key = Key::new("cat");
    /// assert!(key == "cat");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Key {
    /// Allows direct comparison with string references: `key == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Opaque handle for an item within one graph instance.
///
/// Ids are assigned by the owning graph and are unique within it. They carry
/// no meaning beyond identity; the raw value exists only so graphs can mint
/// and index them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an item id from its raw value.
    ///
    /// Intended for the graph that owns the items; ids minted elsewhere will
    /// not resolve against that graph.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle for a chord within one graph instance.
///
/// A chord id indexes the owning graph's chord list in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChordId(u64);

impl ChordId {
    /// Creates a chord id from its raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
