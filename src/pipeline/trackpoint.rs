use crate::types::document::{Node, NodeKind};
use crate::types::record::TrackpointFields;

/// Which container the walk is currently inside. `Value` only counts under a
/// heart-rate container, coordinates only under a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Trackpoint,
    HeartRate,
    Position,
}

/// Flattens one trackpoint subtree into its sensor fields, keeping the source
/// text as is. When a tag repeats, the last value in document order wins.
pub fn extract(trackpoint: &Node) -> TrackpointFields {
    let mut fields = TrackpointFields::default();
    for child in &trackpoint.children {
        visit(child, Scope::Trackpoint, &mut fields);
    }
    fields
}

fn visit(node: &Node, scope: Scope, fields: &mut TrackpointFields) {
    let text = || node.text().map(str::to_string);
    let child_scope = match (node.kind, scope) {
        (NodeKind::Time, _) => {
            fields.timestamp = text();
            scope
        }
        (NodeKind::AltitudeMeters, _) => {
            fields.altitude_meters = text();
            scope
        }
        (NodeKind::DistanceMeters, _) => {
            fields.distance_meters = text();
            scope
        }
        (NodeKind::HeartRateBpm, _) => Scope::HeartRate,
        (NodeKind::Value, Scope::HeartRate) => {
            fields.heart_rate_bpm = text();
            scope
        }
        (NodeKind::Position, _) => Scope::Position,
        (NodeKind::LatitudeDegrees, Scope::Position) => {
            fields.latitude = text();
            scope
        }
        (NodeKind::LongitudeDegrees, Scope::Position) => {
            fields.longitude = text();
            scope
        }
        _ => scope,
    };

    for child in &node.children {
        visit(child, child_scope, fields);
    }
}
