pub const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";

/// The element kinds the pipeline cares about. Anything outside the TCX
/// namespace, or with a local name not listed here, is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    TrainingCenterDatabase,
    Activity,
    Lap,
    Trackpoint,
    Time,
    AltitudeMeters,
    DistanceMeters,
    HeartRateBpm,
    Value,
    Position,
    LatitudeDegrees,
    LongitudeDegrees,
    Plan,
    Name,
    Other,
}

impl NodeKind {
    /// Maps a local name already known to be bound to [`TCX_NAMESPACE`].
    pub fn from_local_name(name: &[u8]) -> Self {
        match name {
            b"TrainingCenterDatabase" => NodeKind::TrainingCenterDatabase,
            b"Activity" => NodeKind::Activity,
            b"Lap" => NodeKind::Lap,
            b"Trackpoint" => NodeKind::Trackpoint,
            b"Time" => NodeKind::Time,
            b"AltitudeMeters" => NodeKind::AltitudeMeters,
            b"DistanceMeters" => NodeKind::DistanceMeters,
            b"HeartRateBpm" => NodeKind::HeartRateBpm,
            b"Value" => NodeKind::Value,
            b"Position" => NodeKind::Position,
            b"LatitudeDegrees" => NodeKind::LatitudeDegrees,
            b"LongitudeDegrees" => NodeKind::LongitudeDegrees,
            b"Plan" => NodeKind::Plan,
            b"Name" => NodeKind::Name,
            _ => NodeKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Attributes keyed by local name.
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content, with empty text treated as absent.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Descendants of `kind` in document order. The search does not descend
    /// into a match, so nested nodes of the same kind are not reported twice.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&Node> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect_kind(kind, &mut found);
        }
        found
    }

    fn collect_kind<'a>(&'a self, kind: NodeKind, found: &mut Vec<&'a Node>) {
        if self.kind == kind {
            found.push(self);
            return;
        }
        for child in &self.children {
            child.collect_kind(kind, found);
        }
    }
}

/// A parsed TCX document. The root is always a `TrainingCenterDatabase` node.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub root: Node,
}

impl SourceDocument {
    pub fn activities(&self) -> Vec<&Node> {
        self.root.find_all(NodeKind::Activity)
    }
}
