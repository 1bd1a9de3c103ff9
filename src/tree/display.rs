//! Console outline of a tree
//!
//! Pre-order, one key per line, one tab of indent per level:
//!
//! ```text
//! Root: 20
//! 	L--- 10
//! 	R--- 30
//! ```

use std::fmt::{self, Display, Write};

use super::Node;

const ROOT_PREFIX: &str = "Root: ";
const LEFT_PREFIX: &str = "L--- ";
const RIGHT_PREFIX: &str = "R--- ";

/// Render the outline of the subtree at `root` into a fresh string.
///
/// An empty tree renders as `<empty>`.
pub fn render_outline<K: Display>(root: Option<&Node<K>>) -> String {
    Outline(root).to_string()
}

struct Outline<'a, K>(Option<&'a Node<K>>);

impl<K: Display> Display for Outline<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(f, self.0)
    }
}

/// Stream the outline into any formatter sink.
pub fn write_outline<K: Display, W: Write>(out: &mut W, root: Option<&Node<K>>) -> fmt::Result {
    match root {
        None => writeln!(out, "<empty>"),
        Some(root) => write_node(out, root, 0, ROOT_PREFIX),
    }
}

fn write_node<K: Display, W: Write>(
    out: &mut W,
    node: &Node<K>,
    level: usize,
    prefix: &str,
) -> fmt::Result {
    for _ in 0..level {
        out.write_char('\t')?;
    }
    writeln!(out, "{}{}", prefix, node.key())?;
    if let Some(left) = node.left() {
        write_node(out, left, level + 1, LEFT_PREFIX)?;
    }
    if let Some(right) = node.right() {
        write_node(out, right, level + 1, RIGHT_PREFIX)?;
    }
    Ok(())
}
