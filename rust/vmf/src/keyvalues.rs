// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered KeyValues tree and its VMF text form

use std::io::{self, Write};

/// A named KeyValues node: ordered properties followed by ordered children.
///
/// Serializes to the Hammer text layout — the node name on its own line,
/// a tab-indented brace block of quoted `"key" "value"` pairs, then the
/// child nodes.
#[derive(Debug, Clone)]
pub struct KvNode {
    name: String,
    properties: Vec<(String, String)>,
    children: Vec<KvNode>,
}

impl KvNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a property, keeping insertion order.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: KvNode) -> Self {
        self.children.push(node);
        self
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, node: KvNode) {
        self.children.push(node);
    }

    /// Serialize this node at the given indentation depth.
    pub fn write_to<W: Write>(&self, w: &mut W, depth: usize) -> io::Result<()> {
        let indent = "\t".repeat(depth);
        writeln!(w, "{indent}{}", self.name)?;
        writeln!(w, "{indent}{{")?;
        for (key, value) in &self.properties {
            writeln!(w, "{indent}\t\"{key}\" \"{value}\"")?;
        }
        for child in &self.children {
            child.write_to(w, depth + 1)?;
        }
        writeln!(w, "{indent}}}")
    }
}

/// Format a coordinate the way Hammer writes it: integral values without a
/// trailing fraction, everything else in plain decimal.
pub fn fmt_coord(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        // + 0.0 folds a negative zero into plain zero
        format!("{:.0}", rounded + 0.0)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_layout() {
        let node = KvNode::new("world")
            .prop("id", "1")
            .prop("classname", "worldspawn")
            .child(KvNode::new("solid").prop("id", "2"));

        let mut out = Vec::new();
        node.write_to(&mut out, 0).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "world\n{\n\t\"id\" \"1\"\n\t\"classname\" \"worldspawn\"\n\tsolid\n\t{\n\t\t\"id\" \"2\"\n\t}\n}\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_coord_formatting() {
        assert_eq!(fmt_coord(224.0), "224");
        assert_eq!(fmt_coord(-64.0), "-64");
        assert_eq!(fmt_coord(3.5), "3.5");
        assert_eq!(fmt_coord(0.0), "0");
    }
}
