use treesmith_core::{Forest, TreeNode};

/// Renderer converts a forest to the connector-based ASCII tree notation
///
/// For every sibling list, the last element gets the corner connector
/// `└─ ` and every other element the tee connector `├─ `. The prefix
/// accumulates `│  ` for each ancestor that is not the last child on its
/// own level, and three spaces for each ancestor that is, which produces
/// the classic continuation-line look:
///
/// ```text
/// ├─ src/
/// │  └─ index.ts  #entry
/// └─ README.md
/// ```
///
/// Folder names are suffixed with `/`; a non-empty comment is appended as
/// `  #<comment>`. Rendering is total: it never fails for a well-formed
/// forest (acyclic by invariant) and the same forest always renders to the
/// same text.
pub struct Renderer {
    tee: &'static str,
    corner: &'static str,
    pipe: &'static str,
    gap: &'static str,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            tee: "├─ ",
            corner: "└─ ",
            pipe: "│  ",
            gap: "   ",
        }
    }

    /// Render the whole forest; the empty forest renders to the empty string
    pub fn render(&self, forest: &Forest) -> String {
        let mut output = String::new();
        self.render_siblings(&forest.roots, "", &mut output);
        output
    }

    fn render_siblings(&self, nodes: &[TreeNode], prefix: &str, output: &mut String) {
        for (index, node) in nodes.iter().enumerate() {
            let is_last = index == nodes.len() - 1;

            output.push_str(prefix);
            output.push_str(if is_last { self.corner } else { self.tee });
            output.push_str(&node.name);
            if node.is_folder() {
                output.push('/');
            }
            if !node.comment.is_empty() {
                output.push_str("  #");
                output.push_str(&node.comment);
            }
            output.push('\n');

            if !node.children.is_empty() {
                let child_prefix = format!("{}{}", prefix, if is_last { self.gap } else { self.pipe });
                self.render_siblings(&node.children, &child_prefix, output);
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a forest
pub fn render(forest: &Forest) -> String {
    Renderer::new().render(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use treesmith_core::NodeKind;

    fn node(id: &str, name: &str, kind: NodeKind) -> TreeNode {
        TreeNode::new(id.to_string(), name.to_string(), kind)
    }

    #[test]
    fn test_render_empty_forest() {
        assert_eq!(render(&Forest::new()), "");
    }

    #[test]
    fn test_render_readme_scenario() {
        let mut src = node("1", "src", NodeKind::Folder);
        let mut entry = node("2", "index.ts", NodeKind::File);
        entry.comment = "entry".to_string();
        src.children.push(entry);

        let forest = Forest {
            roots: vec![src, node("3", "README.md", NodeKind::File)],
        };

        assert_eq!(
            render(&forest),
            "├─ src/\n\
             │  └─ index.ts  #entry\n\
             └─ README.md\n"
        );
    }

    #[test]
    fn test_last_child_ancestors_use_blank_prefix() {
        // a/ is last at root, so its descendants continue with spaces;
        // b/ is not last inside a/, so its descendants continue with │
        let mut b = node("2", "b", NodeKind::Folder);
        b.children.push(node("3", "deep.txt", NodeKind::File));
        let mut a = node("1", "a", NodeKind::Folder);
        a.children.push(b);
        a.children.push(node("4", "tail.txt", NodeKind::File));

        let forest = Forest { roots: vec![a] };

        assert_eq!(
            render(&forest),
            "└─ a/\n\
             \u{20}\u{20}\u{20}├─ b/\n\
             \u{20}\u{20}\u{20}│  └─ deep.txt\n\
             \u{20}\u{20}\u{20}└─ tail.txt\n"
        );
    }

    #[test]
    fn test_empty_comment_renders_nothing() {
        let forest = Forest {
            roots: vec![node("1", "notes.txt", NodeKind::File)],
        };

        assert_eq!(render(&forest), "└─ notes.txt\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut src = node("1", "src", NodeKind::Folder);
        src.children.push(node("2", "main.rs", NodeKind::File));
        let forest = Forest { roots: vec![src] };

        assert_eq!(render(&forest), render(&forest));
    }
}
