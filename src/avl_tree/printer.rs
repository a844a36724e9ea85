use crate::avl_tree::tree::Tree;
use std::fmt::Display;
use std::io::{Result, Write};

const ROOT: &str = "---";
const RIGHT_BRANCH: &str = ".---";
const LEFT_BRANCH: &str = "`---";
const CONTINUATION: &str = "   |";
const BLANK: &str = "    ";

/// Writes `tree` sideways using a reversed in-order traversal: the right subtree is printed above
/// a node and the left subtree below it.
///
/// `trunks` holds one indentation segment per ancestor of the current node and is empty again
/// once the call returns.
pub fn write_tree<T, W>(
    out: &mut W,
    tree: &Tree<T>,
    trunks: &mut Vec<&'static str>,
    is_right: bool,
) -> Result<()>
where
    T: Display,
    W: Write,
{
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(()),
    };

    let mut prev_segment = BLANK;
    trunks.push(BLANK);
    write_tree(out, &node.right, trunks, true)?;

    let depth = trunks.len() - 1;
    if depth == 0 {
        trunks[depth] = ROOT;
    } else if is_right {
        trunks[depth] = RIGHT_BRANCH;
        prev_segment = CONTINUATION;
    } else {
        trunks[depth] = LEFT_BRANCH;
        trunks[depth - 1] = prev_segment;
    }

    for segment in trunks.iter() {
        out.write_all(segment.as_bytes())?;
    }
    writeln!(out, "{}", node.key)?;

    if depth > 0 {
        trunks[depth - 1] = prev_segment;
    }
    trunks[depth] = CONTINUATION;

    write_tree(out, &node.left, trunks, false)?;
    trunks.pop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_tree;
    use crate::avl_tree::node::Node;
    use crate::avl_tree::tree::Tree;

    fn render(tree: &Tree<&str>) -> String {
        let mut out = Vec::new();
        let mut trunks = Vec::new();
        write_tree(&mut out, tree, &mut trunks, false).unwrap();
        assert!(trunks.is_empty());
        String::from_utf8(out).unwrap()
    }

    fn leaf(key: &'static str) -> Tree<&'static str> {
        Some(Box::new(Node::new(key)))
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(render(&None), "");
    }

    #[test]
    fn test_write_single() {
        assert_eq!(render(&leaf("a")), "---a\n");
    }

    #[test]
    fn test_write_three() {
        let mut root = Node::new("b");
        root.left = leaf("a");
        root.right = leaf("c");
        assert_eq!(
            render(&Some(Box::new(root))),
            "    .---c\n---b\n    `---a\n",
        );
    }

    #[test]
    fn test_write_nested_trunks() {
        let mut left = Node::new("b");
        left.left = leaf("a");
        left.right = leaf("c");
        let mut root = Node::new("d");
        root.left = Some(Box::new(left));
        root.right = leaf("e");

        let expected = concat!(
            "    .---e\n",
            "---d\n",
            "   |    .---c\n",
            "    `---b\n",
            "        `---a\n",
        );
        assert_eq!(render(&Some(Box::new(root))), expected);
    }
}
