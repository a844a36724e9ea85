use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the balance factor of a node whose children are balanced and whose own factor is
// within [-2, 2]. Returns the new root of the subtree.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    match node.balance_factor() {
        2 => {
            trace!("rebalancing right-heavy node");
            if node.right.as_ref().map_or(0, |child| child.balance_factor()) < 0 {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        },
        -2 => {
            trace!("rebalancing left-heavy node");
            if node.left.as_ref().map_or(0, |child| child.balance_factor()) > 0 {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        },
        _ => node,
    }
}

// precondition: the tree is not empty
//
// Detaches the minimum node, rebalancing every node on the path to it, and returns its key.
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.left.is_some() {
        let key = remove_min(&mut node.left);
        *tree = Some(balance(node));
        key
    } else {
        let Node { key, right, .. } = *node;
        *tree = right;
        key
    }
}

/// Inserts `key` into the tree. Returns `false` if the key was already present.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    // Only the lowest ancestor whose factor reaches two is rebalanced after an insertion.
    if let Some(mut node) = tree.take() {
        node.update();
        if node.balance_factor().abs() == 2 {
            node = balance(node);
        }
        *tree = Some(node);
    }
    inserted
}

/// Removes `key` from the tree. Returns `false` if the key was not present.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                *tree = right;
                return true;
            },
            (left, None) => {
                *tree = left;
                return true;
            },
            (left, mut right) => {
                node.key = remove_min(&mut right);
                node.left = left;
                node.right = right;
                true
            },
        },
    };

    *tree = Some(balance(node));
    removed
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

// precondition: `key` exists in the tree
pub fn path_to<'a, T>(tree: &'a Tree<T>, key: &T, path: &mut Vec<&'a T>)
where
    T: Ord,
{
    let node = match tree {
        Some(ref node) => node,
        None => unreachable!(),
    };
    path.push(&node.key);
    match key.cmp(&node.key) {
        Ordering::Less => path_to(&node.left, key, path),
        Ordering::Greater => path_to(&node.right, key, path),
        Ordering::Equal => {},
    }
}

pub fn num_nodes<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => 1 + num_nodes(&node.left) + num_nodes(&node.right),
        None => 0,
    }
}
