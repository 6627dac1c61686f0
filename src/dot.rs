use std::fmt::{self, Display};

use crate::{
    node::Node,
    traverse::{Order, Traverse},
};

/// Renders a subtree as a Graphviz digraph, labelling each node with its key,
/// value and height.
#[derive(Debug)]
pub(crate) struct Dot<'a, V>(pub(crate) Option<&'a Node<V>>);

impl<V> Display for Dot<'_, V>
where
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;

        for v in Traverse::new(self.0, Order::PreOrder) {
            writeln!(
                f,
                r#""{}" [label="{} | {} | h={}"];"#,
                v.key(),
                v.key(),
                v.value(),
                v.height(),
            )?;

            let n = v.node();
            for child in [n.left(), n.right()] {
                match child {
                    Some(c) => {
                        writeln!(f, "\"{}\" -> \"{}\" [color = \"orange1\";];", n.key(), c.key())?;
                    }
                    None => {
                        // Render an invisible placeholder so a lone child is
                        // drawn on the correct side of its parent.
                        writeln!(f, "\"null_{}\" [shape=point,style=invis];", n.key())?;
                        writeln!(f, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key())?;
                    }
                }
            }
        }

        writeln!(f, "}}")
    }
}
