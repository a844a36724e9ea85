use crate::avl_tree::printer;
use crate::avl_tree::tree;
use std::fmt::Display;
use std::io::{self, Write};

/// An ordered collection of unique keys implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert("d");
/// tree.insert("b");
/// tree.insert("c");
///
/// assert_eq!(tree.num_nodes(), 3);
/// assert!(tree.contains(&"b"));
/// assert_eq!(tree.trace_path(&"b"), "c b");
///
/// assert!(tree.remove(&"b"));
/// assert!(!tree.remove(&"b"));
/// ```
#[derive(Debug, Serialize)]
pub struct AvlTree<T> {
    root: tree::Tree<T>,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<String> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree { root: None }
    }

    /// Inserts a key into the tree. Returns `false` and leaves the tree untouched if the key
    /// already exists.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.num_nodes(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.root, key);
        if inserted {
            debug!("inserted key, tree height is now {}", self.height());
        }
        inserted
    }

    /// Removes a key from the tree. Returns `false` if the key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        let removed = tree::remove(&mut self.root, key);
        if removed {
            debug!("removed key, tree height is now {}", self.height());
        }
        removed
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the keys visited while descending from the root to `key`, both inclusive. Returns
    /// an empty vector if the key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.path_to(&3), vec![&2, &3]);
    /// assert!(tree.path_to(&4).is_empty());
    /// ```
    pub fn path_to(&self, key: &T) -> Vec<&T> {
        let mut path = Vec::new();
        if self.contains(key) {
            tree::path_to(&self.root, key, &mut path);
        }
        path
    }

    /// Returns the keys on the path from the root to `key` separated by single spaces, or an
    /// empty string if the key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in &["d", "b", "f", "a", "c", "e", "g"] {
    ///     tree.insert(*key);
    /// }
    /// assert_eq!(tree.trace_path(&"c"), "d b c");
    /// assert_eq!(tree.trace_path(&"z"), "");
    /// ```
    pub fn trace_path(&self, key: &T) -> String
    where
        T: Display,
    {
        self.path_to(key)
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Returns the number of nodes in the tree. This walks the whole tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.num_nodes(), 2);
    /// ```
    pub fn num_nodes(&self) -> usize {
        tree::num_nodes(&self.root)
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree. An empty tree has height -1 and a single node has height 0.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    /// for key in 0..7 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Writes a sideways diagram of the tree to `out`. The right subtree of a node is drawn above
    /// it and the left subtree below it.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("a");
    /// tree.insert("b");
    /// tree.insert("c");
    ///
    /// let mut out = Vec::new();
    /// tree.write_tree(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "    .---c\n---b\n    `---a\n");
    /// ```
    pub fn write_tree<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
        W: Write,
    {
        let mut trunks = Vec::new();
        printer::write_tree(out, &self.root, &mut trunks, false)
    }

    /// Writes a sideways diagram of the tree to standard output.
    pub fn print_tree(&self) -> io::Result<()>
    where
        T: Display,
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_tree(&mut handle)?;
        handle.flush()
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
