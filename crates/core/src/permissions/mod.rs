//! Permission nodes in the usual dotted form, e.g. `skyblock.island.sethome`.
//!
//! A `*` segment matches everything below it and a leading `-` negates a
//! node. The first matching node decides.

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    WildCard,
    Named(String),
}

#[derive(Debug, Clone)]
struct PermissionNode {
    path: Vec<PathSegment>,
    value: bool,
}

impl PermissionNode {
    fn parse(node: &str) -> Self {
        let (node, value) = match node.strip_prefix('-') {
            Some(negated) => (negated, false),
            None => (node, true),
        };
        let path = node
            .split('.')
            .map(|s| match s {
                "*" => PathSegment::WildCard,
                s => PathSegment::Named(s.to_owned()),
            })
            .collect();
        Self { path, value }
    }

    fn matches(&self, str: &str) -> bool {
        let mut segments = str.split('.');
        for expected in &self.path {
            match (expected, segments.next()) {
                (PathSegment::WildCard, _) => return true,
                (PathSegment::Named(name), Some(segment)) if name == segment => {}
                _ => return false,
            }
        }
        segments.next().is_none()
    }
}

#[derive(Debug, Default, Clone)]
pub struct PlayerPermissionsCache {
    nodes: Vec<PermissionNode>,
}

impl PlayerPermissionsCache {
    pub fn new<'a>(nodes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut cache = Self::default();
        for node in nodes {
            cache.insert(node);
        }
        cache
    }

    pub fn get_node_val(&self, name: &str) -> Option<bool> {
        self.nodes
            .iter()
            .find(|node| node.matches(name))
            .map(|node| node.value)
    }

    /// Nodes that were never granted count as denied.
    pub fn has(&self, name: &str) -> bool {
        self.get_node_val(name).unwrap_or(false)
    }

    fn insert(&mut self, node: &str) {
        self.nodes.push(PermissionNode::parse(node));
    }
}
