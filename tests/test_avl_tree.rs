use avl_tree::AvlTree;
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 20_000;

// An avl tree with n nodes has height below 1.45 * log2(n + 2).
fn max_height(len: usize) -> i32 {
    (1.45 * ((len + 2) as f64).log2()) as i32
}

fn assert_valid_path(tree: &AvlTree<u32>, key: u32) {
    let path = tree.path_to(&key);
    assert_eq!(path.last(), Some(&&key));
    for window in path.windows(2) {
        let (parent, child) = (*window[0], *window[1]);
        if key < parent {
            assert!(child < parent);
        } else {
            assert!(child > parent);
        }
    }
}

#[test]
fn int_test_avl_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = AvlTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 2_000u32);

        assert_eq!(tree.insert(key), expected.insert(key));
        assert!(tree.contains(&key));
    }

    assert_eq!(tree.num_nodes(), expected.len());
    assert!(tree.height() <= max_height(expected.len()));

    for key in &expected {
        assert_valid_path(&tree, *key);
    }

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 2_000u32);

        assert_eq!(tree.remove(&key), expected.remove(&key));
        assert!(!tree.contains(&key));
        assert!(tree.path_to(&key).is_empty());
    }

    assert_eq!(tree.num_nodes(), expected.len());
    assert!(tree.height() <= max_height(expected.len()));
}

#[test]
fn int_test_sorted_insert_stays_balanced() {
    let mut tree = AvlTree::new();
    for key in 0..1023u32 {
        tree.insert(key);
    }
    assert_eq!(tree.num_nodes(), 1023);
    assert_eq!(tree.height(), 9);

    for key in (0..1023u32).rev().step_by(2) {
        assert!(tree.remove(&key));
    }
    assert_eq!(tree.num_nodes(), 511);
    assert!(tree.height() <= max_height(511));
}

#[test]
fn int_test_duplicate_insert_is_idempotent() {
    let keys = ["m", "c", "x", "a", "e", "q", "z", "d"];
    let mut once = AvlTree::new();
    let mut twice = AvlTree::new();
    for key in keys.iter() {
        once.insert(*key);
        twice.insert(*key);
        assert!(!twice.insert(*key));
    }

    assert_eq!(once.num_nodes(), twice.num_nodes());
    assert_eq!(format!("{:?}", once), format!("{:?}", twice));
}

#[test]
fn int_test_remove_missing_is_noop() {
    let mut tree = AvlTree::new();
    for key in 0..10u32 {
        tree.insert(key);
    }
    let before = format!("{:?}", tree);
    assert!(!tree.remove(&100));
    assert_eq!(format!("{:?}", tree), before);
}
