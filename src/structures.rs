//! Bulk insert/search/delete timings for the basic collection types

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use rand::Rng;

/// The element counts benchmarked by the structures suite
pub const SIZES: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

/// Keys are drawn uniformly from this range, so larger rounds carry many
/// duplicates
const KEY_RANGE: std::ops::RangeInclusive<i64> = 0..=10_000;

/// Phase timings and operation counts for one structure at one size
#[derive(Debug, Clone)]
pub struct StructureTiming {
    pub structure: &'static str,
    pub insert: Duration,
    pub search: Duration,
    pub delete: Duration,
    /// Operations performed per phase: (inserted, searched, deleted)
    pub counts: (usize, usize, usize),
}

/// Generate the random keys driving one benchmark round
pub fn generate_keys<R: Rng>(len: usize, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(KEY_RANGE)).collect()
}

/// Time insert-all, search-all and delete-all for every structure
pub fn benchmark_structures(keys: &[i64]) -> Vec<StructureTiming> {
    vec![
        bench_list(keys),
        bench_hash_map(keys),
        bench_bst(keys),
        bench_stack(keys),
        bench_queue(keys),
    ]
}

/// Time one operation phase
fn timed<T>(phase: impl FnOnce() -> T) -> (Duration, T) {
    let now = Instant::now();
    let result = phase();
    (now.elapsed(), result)
}

fn bench_list(keys: &[i64]) -> StructureTiming {
    let mut list = Vec::with_capacity(keys.len());

    let (insert, _) = timed(|| {
        for &key in keys {
            list.push(key);
        }
    });
    let (search, _) = timed(|| keys.iter().filter(|&&key| list.contains(&key)).count());
    let (delete, deleted) = timed(|| {
        let mut deleted = 0;
        for key in keys {
            if let Some(position) = list.iter().position(|value| value == key) {
                list.remove(position);
                deleted += 1;
            }
        }
        deleted
    });

    StructureTiming {
        structure: "List",
        insert,
        search,
        delete,
        counts: (keys.len(), keys.len(), deleted),
    }
}

fn bench_hash_map(keys: &[i64]) -> StructureTiming {
    let mut map = HashMap::with_capacity(keys.len());

    let (insert, _) = timed(|| {
        for &key in keys {
            map.insert(key, ());
        }
    });
    let (search, _) = timed(|| keys.iter().filter(|&&key| map.contains_key(&key)).count());
    // Duplicate keys collapse on insert, so only the first delete per key counts
    let (delete, deleted) = timed(|| keys.iter().filter(|&&key| map.remove(&key).is_some()).count());

    StructureTiming {
        structure: "HashMap",
        insert,
        search,
        delete,
        counts: (keys.len(), keys.len(), deleted),
    }
}

fn bench_bst(keys: &[i64]) -> StructureTiming {
    let mut bst = Bst::new();

    let (insert, _) = timed(|| {
        for &key in keys {
            bst.insert(key);
        }
    });
    let inserted = bst.len();

    let (search, _) = timed(|| keys.iter().filter(|&&key| bst.contains(key)).count());
    let (delete, deleted) = timed(|| keys.iter().filter(|&&key| bst.remove(key)).count());
    debug_assert!(bst.is_empty());

    StructureTiming {
        structure: "BST",
        insert,
        search,
        delete,
        counts: (inserted, keys.len(), deleted),
    }
}

fn bench_stack(keys: &[i64]) -> StructureTiming {
    let mut stack = Vec::with_capacity(keys.len());

    let (insert, _) = timed(|| {
        for &key in keys {
            stack.push(key);
        }
    });
    let (search, _) = timed(|| keys.iter().filter(|&&key| stack.contains(&key)).count());
    let (delete, deleted) = timed(|| {
        let mut deleted = 0;
        while stack.pop().is_some() {
            deleted += 1;
        }
        deleted
    });

    StructureTiming {
        structure: "Stack",
        insert,
        search,
        delete,
        counts: (keys.len(), keys.len(), deleted),
    }
}

fn bench_queue(keys: &[i64]) -> StructureTiming {
    let mut queue = VecDeque::with_capacity(keys.len());

    let (insert, _) = timed(|| {
        for &key in keys {
            queue.push_back(key);
        }
    });
    let (search, _) = timed(|| keys.iter().filter(|&&key| queue.contains(&key)).count());
    let (delete, deleted) = timed(|| {
        let mut deleted = 0;
        while queue.pop_front().is_some() {
            deleted += 1;
        }
        deleted
    });

    StructureTiming {
        structure: "Queue",
        insert,
        search,
        delete,
        counts: (keys.len(), keys.len(), deleted),
    }
}

/// An unbalanced binary search tree over `i64` keys
///
/// Duplicate keys descend to the right. Insert and search walk links
/// iteratively; removal recurses by ownership, so its depth is bounded by
/// the tree height — the suite feeds uniform random keys, which keeps the
/// expected height logarithmic.
#[derive(Debug, Default)]
pub struct Bst {
    root: Option<Box<Node>>,
    len: usize,
}

#[derive(Debug)]
struct Node {
    key: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Bst {
    pub fn new() -> Bst {
        Bst::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, key: i64) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Box::new(Node {
            key,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    pub fn contains(&self, key: i64) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            if key == node.key {
                return true;
            }
            link = if key < node.key {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }

    /// Remove one occurrence of `key`, returning whether a node was removed
    pub fn remove(&mut self, key: i64) -> bool {
        let (root, removed) = Self::remove_node(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(link: Option<Box<Node>>, key: i64) -> (Option<Box<Node>>, bool) {
        let Some(mut node) = link else {
            return (None, false);
        };

        if key < node.key {
            let (left, removed) = Self::remove_node(node.left.take(), key);
            node.left = left;
            (Some(node), removed)
        } else if key > node.key {
            let (right, removed) = Self::remove_node(node.right.take(), key);
            node.right = right;
            (Some(node), removed)
        } else {
            match (node.left.take(), node.right.take()) {
                (None, right) => (right, true),
                (left, None) => (left, true),
                (left, Some(right)) => {
                    // Two children: adopt the smallest key of the right
                    // subtree, then remove that key from it
                    let successor = min_key(&right);
                    node.key = successor;

                    let (right, _) = Self::remove_node(Some(right), successor);
                    node.left = left;
                    node.right = right;
                    (Some(node), true)
                }
            }
        }
    }
}

/// The smallest key in the subtree at `node`
fn min_key(node: &Node) -> i64 {
    let mut current = node;
    while let Some(left) = &current.left {
        current = left;
    }
    current.key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order(bst: &Bst) -> Vec<i64> {
        fn walk(link: &Option<Box<Node>>, out: &mut Vec<i64>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.key);
                walk(&node.right, out);
            }
        }

        let mut out = Vec::with_capacity(bst.len());
        walk(&bst.root, &mut out);
        out
    }

    #[test]
    fn bst_insert_and_search() {
        let mut bst = Bst::new();
        for key in [5, 3, 8, 3, 7] {
            bst.insert(key);
        }

        assert_eq!(bst.len(), 5);
        assert_eq!(in_order(&bst), [3, 3, 5, 7, 8]);
        assert!(bst.contains(7));
        assert!(!bst.contains(4));
    }

    #[test]
    fn bst_remove_duplicates_one_at_a_time() {
        let mut bst = Bst::new();
        for key in [5, 3, 8, 3] {
            bst.insert(key);
        }

        assert!(bst.remove(3));
        assert!(bst.contains(3));
        assert!(bst.remove(3));
        assert!(!bst.contains(3));
        assert!(!bst.remove(3));
        assert_eq!(bst.len(), 2);
    }

    #[test]
    fn bst_remove_node_with_two_children() {
        let mut bst = Bst::new();
        for key in [5, 3, 8, 7, 9] {
            bst.insert(key);
        }

        assert!(bst.remove(5));
        assert_eq!(in_order(&bst), [3, 7, 8, 9]);

        assert!(bst.remove(8));
        assert_eq!(in_order(&bst), [3, 7, 9]);
    }

    #[test]
    fn bst_drains_to_empty() {
        let mut rng = crate::test::test_rng();
        let keys = generate_keys(1_000, &mut rng);

        let mut bst = Bst::new();
        for &key in &keys {
            bst.insert(key);
        }
        assert_eq!(bst.len(), keys.len());

        for &key in &keys {
            assert!(bst.remove(key));
        }
        assert!(bst.is_empty());
        assert!(in_order(&bst).is_empty());
    }

    #[test]
    fn benchmark_counts() {
        let mut rng = crate::test::test_rng();
        let keys = generate_keys(500, &mut rng);
        let unique = {
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.len()
        };

        for timing in benchmark_structures(&keys) {
            let (inserted, searched, deleted) = timing.counts;
            assert_eq!(searched, keys.len(), "{}", timing.structure);

            match timing.structure {
                // Duplicates collapse on insert, so deletes stop at the
                // unique key count
                "HashMap" => {
                    assert_eq!(inserted, keys.len());
                    assert_eq!(deleted, unique);
                }
                _ => {
                    assert_eq!(inserted, keys.len(), "{}", timing.structure);
                    assert_eq!(deleted, keys.len(), "{}", timing.structure);
                }
            }
        }
    }
}
