//! Graphviz export.
//!
//! Every node becomes a record `{key|{<left>|<right>}}` filled red or white
//! by color. Each absent child is drawn as its own grey `NIL` node so the
//! leaf-sentinels are visible.

use std::fmt::{self, Display, Write};

use super::{Color, NodeRef, RedBlackTree, Side};

impl<K: Display> RedBlackTree<K> {
    /// Writes the tree as a Graphviz `digraph` into `out`.
    ///
    /// Nodes are emitted in prefix order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `out` or by a key's
    /// `Display` implementation. Output written before the error stays in
    /// `out`.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "digraph RedBlackTree {{")?;
        writeln!(out, "\tgraph [ranksep=0.5];")?;
        writeln!(out, "\tnode [shape = record];")?;
        writeln!(out)?;

        let mut result = Ok(());
        self.depth_prefix(|node| {
            if result.is_ok() {
                result = write_node(out, node);
            }
        });
        result?;

        writeln!(out, "}}")
    }

    /// Renders the tree as a Graphviz `digraph`.
    ///
    /// If a key's `Display` implementation fails, the graph ends just
    /// before that node's record. Use [`RedBlackTree::write_dot`] to observe
    /// the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [1].into_iter().collect();
    /// let dot = tree.to_dot();
    /// assert!(dot.starts_with("digraph RedBlackTree {"));
    /// assert!(dot.contains("n0 [label=\"{1|{<left>|<right>}}\", style=filled, fillcolor=white];"));
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        if let Err(error) = self.write_dot(&mut out) {
            tracing::debug!(
                %error,
                written = out.len(),
                "dot export truncated by key formatting"
            );
        }
        out
    }
}

fn write_node<K: Display, W: Write>(out: &mut W, node: NodeRef<'_, K>) -> fmt::Result {
    let id = node.id().index();
    let fill = match node.color() {
        Color::Red => "red",
        Color::Black => "white",
    };
    writeln!(
        out,
        "\tn{id} [label=\"{{{}|{{<left>|<right>}}}}\", style=filled, fillcolor={fill}];",
        Escaped(node.key())
    )?;

    for (side, port, nil) in [(Side::Left, "left", "lnil"), (Side::Right, "right", "rnil")] {
        match node.child(side) {
            Some(child) => writeln!(
                out,
                "\tn{id}:{port}:c -> n{}:n [headclip=false, tailclip=false]",
                child.id().index()
            )?,
            None => {
                writeln!(out, "\t{nil}{id} [style=filled, fillcolor=grey, label=\"NIL\"];")?;
                writeln!(
                    out,
                    "\tn{id}:{port}:c -> {nil}{id}:n [headclip=false, tailclip=false]"
                )?;
            }
        }
    }
    Ok(())
}

/// Escapes characters that are structural inside a record label.
struct Escaped<'a, K>(&'a K);

impl<K: Display> Display for Escaped<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(EscapingWriter(formatter), "{}", self.0)
    }
}

/// Forwards to the wrapped writer, escaping record characters on the way.
struct EscapingWriter<'a, W>(&'a mut W);

impl<W: Write> Write for EscapingWriter<'_, W> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        for character in text.chars() {
            if matches!(character, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
                self.0.write_char('\\')?;
            }
            self.0.write_char(character)?;
        }
        Ok(())
    }
}
