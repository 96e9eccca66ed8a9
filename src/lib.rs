//! An ordered map on top of a probabilistic skip list.
//!
//! ```text
//! level 2:  front ──────────► 3 ──────────────────────► end
//! level 1:  front ──────────► 3 ─────────► 8 ──► 9 ───► end
//! level 0:  front ──► 1 ────► 3 ──► 5 ───► 8 ──► 9 ───► end
//! ```
//!
//! Every key lives on level 0; each node additionally spans a random number
//! of express levels above it, so lookups, inserts and removals take
//! `O(log(n))` steps on average with no rebalancing.
//!
//! ```
//! use ordered_skipmap::{Error, SkipMap};
//!
//! let mut map = SkipMap::new();
//! for &k in &[5, 3, 8, 1, 9] {
//!     map.set(k, k * 10);
//! }
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8, 9]);
//! assert_eq!(map.remove(&3), Ok(30));
//! assert_eq!(map.get(&3), Err(Error::KeyNotFound));
//! ```
//!
//! Keys are ordered by a [`Comparator`], which defaults to `Ord`. Node heights
//! come from a [`LevelGenerator`], which defaults to a geometric process with
//! `p = 0.5` and can be replaced by a seeded or scripted one.
//!
//! The structure never shrinks: once a tall node has raised the height,
//! the upper levels stay allocated (possibly empty) after it is removed.

use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::iter::FromIterator;
use std::mem;

pub mod comparator;
mod error;
mod iter;
pub mod level;
mod options;
#[cfg(feature = "serde_support")]
mod serde;

pub use crate::comparator::{Comparator, DisplayComparator, OrdComparator};
pub use crate::error::Error;
pub use crate::iter::{IntoIter, Iter, Keys, Values};
pub use crate::level::{GeometricLevels, LevelGenerator, ScriptedLevels};
pub use crate::options::Options;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// `links[i]` is the next node on level `i`. Its length is the node height.
    pub(crate) links: Vec<Option<usize>>,
}

/// A position on a level: either the front vector or a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Front,
    Node(usize),
}

/// An ordered map backed by a skip list.
///
/// Nodes are kept in an arena and linked by index, so the map contains no
/// raw pointers. Slots freed by [`remove`](SkipMap::remove) are reused by
/// later insertions.
pub struct SkipMap<K, V, C = OrdComparator, G = GeometricLevels> {
    /// First node on each level. `front.len()` is the current height.
    front: Vec<Option<usize>>,
    nodes: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    len: usize,
    comparator: C,
    levels: G,
}

impl<K: Ord, V> SkipMap<K, V> {
    /// Creates an empty map ordered by `Ord`, with heights drawn from an
    /// entropy-seeded geometric generator.
    pub fn new() -> Self {
        Self::with_comparator(OrdComparator)
    }
}

impl<K: Ord, V> Default for SkipMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> SkipMap<K, V, C, GeometricLevels> {
    /// Creates an empty map ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_level_generator(comparator, GeometricLevels::default())
    }

    /// Creates an empty map configured by `options`.
    ///
    /// Fails with [`Error::InvalidArgument`] if the options don't validate.
    pub fn with_options(comparator: C, options: Options) -> Result<Self, Error> {
        options.validate()?;
        let levels = GeometricLevels::from_options(&options)?;
        Ok(Self::build(comparator, levels, options.initial_height))
    }
}

impl<K, V, C, G> SkipMap<K, V, C, G> {
    /// Creates an empty map whose node heights come from `levels`.
    pub fn with_level_generator(comparator: C, levels: G) -> Self {
        Self::build(comparator, levels, Options::DEFAULT_INITIAL_HEIGHT)
    }

    fn build(comparator: C, levels: G, initial_height: usize) -> Self {
        SkipMap {
            front: vec![None; initial_height.max(1)],
            nodes: Vec::new(),
            free: Vec::new(),
            len: 0,
            comparator,
            levels,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently in use. Never decreases; starts at the
    /// initial height.
    #[inline]
    pub fn height(&self) -> usize {
        self.front.len()
    }

    /// The comparator ordering the keys.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    ///
    /// The iterator borrows the map, so the map can't be modified while the
    /// iteration is in progress.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.front[0], self.len)
    }

    /// Same as [`iter`](SkipMap::iter).
    pub fn entries(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Values, ordered by their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Calls `action` on every pair in ascending key order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.iter() {
            action(k, v);
        }
    }

    /// Removes every entry. The height is kept.
    pub fn clear(&mut self) {
        for slot in self.front.iter_mut() {
            *slot = None;
        }
        self.nodes.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Writes every level, top first, one line each. Level 0 holds every
    /// entry and is rendered as `key=value`:
    ///
    /// ```text
    /// level 1: front -> 3 -> 8 -> end
    /// level 0: front -> 1="a" -> 3="c" -> 5="e" -> 8="h" -> end
    /// ```
    pub fn dump<W: io::Write>(&self, mut pen: W) -> io::Result<()>
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        pen.write_all(self.dump_string().as_bytes())?;
        pen.flush()
    }

    /// The text written by [`dump`](SkipMap::dump).
    pub fn dump_string(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        let mut out = String::new();
        for level in (0..self.height()).rev() {
            out.push_str(&format!("level {}: front", level));
            let mut curr = self.front[level];
            while let Some(idx) = curr {
                let node = self.node(idx);
                if level == 0 {
                    out.push_str(&format!(" -> {:?}={:?}", node.key, node.value));
                } else {
                    out.push_str(&format!(" -> {:?}", node.key));
                }
                curr = node.links[level];
            }
            out.push_str(" -> end\n");
        }
        out
    }

    #[inline]
    fn node(&self, idx: usize) -> &Node<K, V> {
        match self.nodes[idx].as_ref() {
            Some(node) => node,
            None => unreachable!("link to freed node {}", idx),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> &mut Node<K, V> {
        match self.nodes[idx].as_mut() {
            Some(node) => node,
            None => unreachable!("link to freed node {}", idx),
        }
    }

    #[inline]
    fn next_of(&self, at: Cursor, level: usize) -> Option<usize> {
        match at {
            Cursor::Front => self.front[level],
            Cursor::Node(idx) => self.node(idx).links[level],
        }
    }

    #[inline]
    fn set_next(&mut self, at: Cursor, level: usize, next: Option<usize>) {
        match at {
            Cursor::Front => self.front[level] = next,
            Cursor::Node(idx) => self.node_mut(idx).links[level] = next,
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<K, V> {
        match self.nodes[idx].take() {
            Some(node) => {
                self.free.push(idx);
                node
            }
            None => unreachable!("double release of node {}", idx),
        }
    }
}

impl<K, V, C: Comparator<K>, G> SkipMap<K, V, C, G> {
    /// Walks from the top level down to level 0, calling `visit` with the
    /// last position before `key` on each level. Returns the level 0
    /// predecessor.
    fn descend<F>(&self, key: &K, mut visit: F) -> Cursor
    where
        F: FnMut(usize, Cursor),
    {
        let mut curr = Cursor::Front;
        for level in (0..self.height()).rev() {
            while let Some(next) = self.next_of(curr, level) {
                if self.comparator.compare(&self.node(next).key, key) == Ordering::Less {
                    curr = Cursor::Node(next);
                } else {
                    break;
                }
            }
            visit(level, curr);
        }
        curr
    }

    /// The predecessor of `key` on every level; `frontier[i]`'s link on
    /// level `i` is the first node whose key is not less than `key`.
    fn frontier(&self, key: &K) -> Vec<Cursor> {
        let mut frontier = vec![Cursor::Front; self.height()];
        self.descend(key, |level, curr| frontier[level] = curr);
        frontier
    }

    /// The level 0 successor of `pred`, if it holds `key`.
    #[inline]
    fn matching_successor(&self, pred: Cursor, key: &K) -> Option<usize> {
        let succ = self.next_of(pred, 0)?;
        if self.comparator.compare(&self.node(succ).key, key) == Ordering::Equal {
            Some(succ)
        } else {
            None
        }
    }

    fn find(&self, key: &K) -> Option<usize> {
        let pred = self.descend(key, |_, _| {});
        self.matching_successor(pred, key)
    }

    /// Returns the value stored under `key`, or [`Error::KeyNotFound`].
    pub fn get(&self, key: &K) -> Result<&V, Error> {
        match self.find(key) {
            Some(idx) => Ok(&self.node(idx).value),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Like [`get`](SkipMap::get), but the value can be modified in place.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, Error> {
        match self.find(key) {
            Some(idx) => Ok(&mut self.node_mut(idx).value),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Removes `key`, returning its value.
    ///
    /// On [`Error::KeyNotFound`] the map is left untouched. The height does
    /// not shrink, even if the removed node was the only one on the top
    /// levels.
    pub fn remove(&mut self, key: &K) -> Result<V, Error> {
        let frontier = self.frontier(key);
        let target = match self.matching_successor(frontier[0], key) {
            Some(idx) => idx,
            None => return Err(Error::KeyNotFound),
        };
        let node = self.release(target);
        for level in (0..node.links.len()).rev() {
            debug_assert_eq!(self.next_of(frontier[level], level), Some(target));
            self.set_next(frontier[level], level, node.links[level]);
        }
        self.len -= 1;
        trace!("removed node {} of height {}", target, node.links.len());
        Ok(node.value)
    }

    #[cfg(test)]
    fn ensure_invariants(&self) {
        // Order on level 0, and every live node reachable there exactly once.
        let mut seen = vec![false; self.nodes.len()];
        let mut count = 0;
        let mut curr = self.front[0];
        let mut prev: Option<usize> = None;
        while let Some(idx) = curr {
            assert!(!seen[idx], "cycle at node {}", idx);
            seen[idx] = true;
            count += 1;
            if let Some(p) = prev {
                assert_eq!(
                    self.comparator.compare(&self.node(p).key, &self.node(idx).key),
                    Ordering::Less
                );
            }
            prev = Some(idx);
            curr = self.node(idx).links[0];
        }
        assert_eq!(count, self.len);
        assert_eq!(self.nodes.iter().filter(|n| n.is_some()).count(), self.len);
        // Tower: level i is a subsequence of level i - 1, and every node of
        // height > i shows up on level i.
        for level in 1..self.height() {
            let mut below = self.front[level - 1];
            let mut curr = self.front[level];
            while let Some(idx) = curr {
                assert!(self.node(idx).links.len() > level);
                while below != Some(idx) {
                    match below {
                        Some(b) => below = self.node(b).links[level - 1],
                        None => panic!("node {} on level {} missing below", idx, level),
                    }
                }
                curr = self.node(idx).links[level];
            }
            let tall = self
                .nodes
                .iter()
                .flatten()
                .filter(|n| n.links.len() > level)
                .count();
            let mut on_level = 0;
            let mut curr = self.front[level];
            while let Some(idx) = curr {
                on_level += 1;
                curr = self.node(idx).links[level];
            }
            assert_eq!(tall, on_level);
        }
    }
}

impl<K, V, C: Comparator<K>, G: LevelGenerator> SkipMap<K, V, C, G> {
    /// Inserts or updates `key`, returning the previous value if it was
    /// already present.
    ///
    /// Updating keeps the node and its height; only new keys draw a height.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let frontier = self.frontier(&key);
        if let Some(idx) = self.matching_successor(frontier[0], &key) {
            trace!("updating node {} in place", idx);
            return Some(mem::replace(&mut self.node_mut(idx).value, value));
        }

        let height = self.levels.random_height().max(1);
        let idx = self.alloc(Node {
            key,
            value,
            links: vec![None; height],
        });
        let old_height = self.height();
        for (level, &pred) in frontier.iter().enumerate().take(height) {
            let next = self.next_of(pred, level);
            self.node_mut(idx).links[level] = next;
            self.set_next(pred, level, Some(idx));
        }
        if height > old_height {
            debug!("raising height from {} to {}", old_height, height);
            self.front.resize(height, Some(idx));
        }
        self.len += 1;
        trace!("inserted node {} of height {}", idx, height);
        None
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, G> fmt::Debug for SkipMap<K, V, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, G> PartialEq for SkipMap<K, V, C, G>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C, G> Eq for SkipMap<K, V, C, G> {}

impl<K, V, C, G> Extend<(K, V)> for SkipMap<K, V, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SkipMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, C, G> IntoIterator for &'a SkipMap<K, V, C, G> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C, G> IntoIterator for SkipMap<K, V, C, G> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.front[0], self.len)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, OrdComparator, ScriptedLevels, SkipMap};

    fn scripted<V>(heights: Vec<usize>) -> SkipMap<i32, V, OrdComparator, ScriptedLevels> {
        SkipMap::with_level_generator(OrdComparator, ScriptedLevels::new(heights))
    }

    #[test]
    fn insert_no_panic() {
        let mut sl = SkipMap::new();
        for &k in &[10, 30, 50, 5, 0, 3] {
            assert_eq!(sl.set(k, ()), None);
            sl.ensure_invariants();
        }
        assert_eq!(sl.len(), 6);
    }

    #[test]
    fn scenario() {
        let mut sl = SkipMap::new();
        for &k in &[5, 3, 8, 1, 9] {
            sl.set(k, format!("v{}", k));
        }
        assert_eq!(sl.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8, 9]);
        assert_eq!(sl.get(&8).map(String::as_str), Ok("v8"));

        assert_eq!(sl.remove(&3), Ok("v3".to_string()));
        assert_eq!(sl.len(), 4);
        assert_eq!(sl.get(&3), Err(Error::KeyNotFound));
        assert_eq!(sl.keys().copied().collect::<Vec<_>>(), vec![1, 5, 8, 9]);

        assert_eq!(sl.set(5, "new".to_string()), Some("v5".to_string()));
        assert_eq!(sl.get(&5).map(String::as_str), Ok("new"));
        assert_eq!(sl.len(), 4);
        sl.ensure_invariants();
    }

    #[test]
    fn exact_shape_with_scripted_heights() {
        let mut sl = scripted(vec![1, 3, 2, 1, 2]);
        for &k in &[5, 3, 8, 1, 9] {
            sl.set(k, k * 10);
        }
        assert_eq!(sl.height(), 3);
        assert_eq!(
            sl.dump_string(),
            "level 2: front -> 3 -> end\n\
             level 1: front -> 3 -> 8 -> 9 -> end\n\
             level 0: front -> 1=10 -> 3=30 -> 5=50 -> 8=80 -> 9=90 -> end\n"
        );
        sl.ensure_invariants();
    }

    #[test]
    fn dump_writes_entries_to_sink() {
        let mut sl = scripted(vec![2, 1]);
        sl.set(2, "two");
        sl.set(1, "one");
        let mut out = Vec::new();
        sl.dump(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "level 1: front -> 2 -> end\n\
             level 0: front -> 1=\"one\" -> 2=\"two\" -> end\n"
        );
    }

    #[test]
    fn height_never_shrinks() {
        let mut sl = scripted(vec![1, 4, 1]);
        sl.set(1, 'a');
        sl.set(2, 'b');
        sl.set(3, 'c');
        assert_eq!(sl.height(), 4);
        assert_eq!(sl.remove(&2), Ok('b'));
        assert_eq!(sl.height(), 4);
        assert_eq!(
            sl.dump_string(),
            "level 3: front -> end\n\
             level 2: front -> end\n\
             level 1: front -> end\n\
             level 0: front -> 1='a' -> 3='c' -> end\n"
        );
        sl.ensure_invariants();

        // The script wraps: 2 comes back with height 1, then 0 gets height 4
        // and reuses the empty upper levels.
        sl.set(2, 'd');
        assert_eq!(sl.height(), 4);
        sl.set(0, 'e');
        assert_eq!(
            sl.dump_string(),
            "level 3: front -> 0 -> end\n\
             level 2: front -> 0 -> end\n\
             level 1: front -> 0 -> end\n\
             level 0: front -> 0='e' -> 1='a' -> 2='d' -> 3='c' -> end\n"
        );
        sl.ensure_invariants();
    }

    #[test]
    fn update_does_not_draw_a_height() {
        let mut sl = scripted(vec![2, 1, 3]);
        sl.set(10, 1);
        assert_eq!(sl.set(10, 2), Some(1));
        assert_eq!(sl.set(10, 3), Some(2));
        // The second scripted height (1) goes to the next new key.
        sl.set(20, 0);
        assert_eq!(sl.height(), 2);
        assert_eq!(
            sl.dump_string(),
            "level 1: front -> 10 -> end\n\
             level 0: front -> 10=3 -> 20=0 -> end\n"
        );
        assert_eq!(sl.get(&10), Ok(&3));
    }

    #[test]
    fn remove_missing_leaves_map_untouched() {
        let mut sl = scripted(vec![2, 1, 3, 1]);
        for &k in &[4, 2, 6, 8] {
            sl.set(k, k);
        }
        let before = sl.dump_string();
        assert_eq!(sl.remove(&5), Err(Error::KeyNotFound));
        assert_eq!(sl.remove(&0), Err(Error::KeyNotFound));
        assert_eq!(sl.remove(&100), Err(Error::KeyNotFound));
        assert_eq!(sl.len(), 4);
        assert_eq!(sl.dump_string(), before);
    }

    #[test]
    fn empty_map() {
        let mut sl: SkipMap<u32, u32> = SkipMap::new();
        assert!(sl.is_empty());
        assert_eq!(sl.height(), 1);
        assert_eq!(sl.get(&1), Err(Error::KeyNotFound));
        assert_eq!(sl.remove(&1), Err(Error::KeyNotFound));
        assert!(!sl.contains_key(&1));
        assert_eq!(sl.iter().next(), None);
        assert_eq!(sl.dump_string(), "level 0: front -> end\n");
    }

    #[test]
    fn remove_everything() {
        let mut sl = SkipMap::new();
        for i in 0..200 {
            sl.set(i, i * 2);
        }
        sl.ensure_invariants();
        for i in (0..200).step_by(2) {
            assert_eq!(sl.remove(&i), Ok(i * 2));
        }
        sl.ensure_invariants();
        for i in (1..200).step_by(2).rev() {
            assert_eq!(sl.remove(&i), Ok(i * 2));
        }
        assert!(sl.is_empty());
        assert_eq!(sl.iter().count(), 0);
        sl.ensure_invariants();
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut sl = SkipMap::new();
        for i in 0..10 {
            sl.set(i, ());
        }
        for i in 0..5 {
            sl.remove(&i).unwrap();
        }
        for i in 10..15 {
            sl.set(i, ());
        }
        assert_eq!(sl.nodes.len(), 10);
        assert_eq!(sl.keys().copied().collect::<Vec<_>>(), (5..15).collect::<Vec<_>>());
        sl.ensure_invariants();
    }

    #[test]
    fn idempotent_lookup() {
        let sl: SkipMap<_, _> = (0..50).map(|i| (i, i.to_string())).collect();
        for i in 0..50 {
            let first = sl.get(&i).cloned();
            assert_eq!(first, sl.get(&i).cloned());
            assert_eq!(first, Ok(i.to_string()));
        }
    }

    #[test]
    fn custom_comparator() {
        let mut sl = SkipMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for i in 0..10 {
            sl.set(i, ());
        }
        assert_eq!(sl.keys().copied().collect::<Vec<_>>(), (0..10).rev().collect::<Vec<_>>());
        assert!(sl.contains_key(&3));
        assert_eq!(sl.remove(&3), Ok(()));
        assert!(!sl.contains_key(&3));
        sl.ensure_invariants();
    }

    #[test]
    fn display_comparator() {
        use crate::DisplayComparator;
        let mut sl = SkipMap::with_comparator(DisplayComparator);
        for &i in &[9, 10, 1, 100] {
            sl.set(i, ());
        }
        assert_eq!(sl.keys().copied().collect::<Vec<_>>(), vec![1, 10, 100, 9]);
    }

    #[test]
    fn get_mut_and_for_each() {
        let mut sl: SkipMap<_, _> = vec![(2, 20), (1, 10), (3, 30)].into_iter().collect();
        *sl.get_mut(&2).unwrap() += 1;
        assert_eq!(sl.get_mut(&4), Err(Error::KeyNotFound));
        let mut seen = Vec::new();
        sl.for_each(|k, v| seen.push((*k, *v)));
        assert_eq!(seen, vec![(1, 10), (2, 21), (3, 30)]);
        assert_eq!(sl.values().copied().collect::<Vec<_>>(), vec![10, 21, 30]);
    }

    #[test]
    fn clear_keeps_height() {
        let mut sl = scripted(vec![3]);
        sl.set(1, 1);
        sl.set(2, 2);
        sl.clear();
        assert!(sl.is_empty());
        assert_eq!(sl.height(), 3);
        assert_eq!(sl.get(&1), Err(Error::KeyNotFound));
        sl.set(1, 5);
        assert_eq!(sl.get(&1), Ok(&5));
        sl.ensure_invariants();
    }

    #[test]
    fn owned_iteration() {
        let mut sl = SkipMap::new();
        for &k in &["b", "c", "a"] {
            sl.set(k.to_string(), k.len());
        }
        sl.remove(&"c".to_string()).unwrap();
        let all: Vec<_> = sl.into_iter().collect();
        assert_eq!(all, vec![("a".to_string(), 1), ("b".to_string(), 1)]);
    }

    #[test]
    fn debug_and_eq() {
        let a: SkipMap<_, _> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        let b: SkipMap<_, _> = vec![(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(format!("{:?}", a), "{1: 'a', 2: 'b'}");
        assert_eq!(a, b);
    }

    #[test]
    fn options() {
        use crate::Options;
        let options = Options::default().with_initial_height(4).with_seed(11);
        let mut sl = SkipMap::with_options(OrdComparator, options).unwrap();
        assert_eq!(sl.height(), 4);
        for i in 0..100 {
            sl.set(i, i);
        }
        sl.ensure_invariants();

        let bad = Options::default().with_probability(2.0);
        let res: Result<SkipMap<i32, i32>, _> = SkipMap::with_options(OrdComparator, bad);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn height_is_logarithmic() {
        use crate::{GeometricLevels, Options};
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(99);
        let levels = GeometricLevels::from_options(&Options::default().with_seed(5)).unwrap();
        let mut sl = SkipMap::with_level_generator(OrdComparator, levels);
        for _ in 0..20_000 {
            sl.set(rng.gen::<u64>(), ());
        }
        let log = (sl.len() as f64).log2();
        assert!((sl.height() as f64) < 2.0 * log, "height = {}", sl.height());
        assert!((sl.height() as f64) > log / 2.0, "height = {}", sl.height());
    }
}
