use crate::pipeline::trackpoint;
use crate::types::document::{Node, NodeKind};
use crate::types::record::{ActivityContext, LapContext, Record};

/// Resolves the per-activity context. The name comes from the last
/// `Plan/Name` leaf anywhere under the activity; an empty last leaf clears it.
pub fn context(activity: &Node, source_file: &str) -> ActivityContext {
    let name = activity
        .find_all(NodeKind::Plan)
        .into_iter()
        .flat_map(|plan| plan.find_all(NodeKind::Name))
        .last()
        .and_then(|name| name.text())
        .map(str::to_string);

    ActivityContext {
        name,
        sport: activity.attribute("Sport").map(str::to_string),
        source_file: source_file.to_string(),
    }
}

pub fn lap_context(lap: &Node) -> LapContext {
    LapContext {
        start_time: lap.attribute("StartTime").map(str::to_string),
    }
}

/// Builds one record per trackpoint across all laps of the activity, in
/// document order.
pub fn walk(activity: &Node, source_file: &str) -> Vec<Record> {
    let ctx = context(activity, source_file);
    let mut records = Vec::new();

    for lap in activity.find_all(NodeKind::Lap) {
        let lap_ctx = lap_context(lap);
        let trackpoints = lap.find_all(NodeKind::Trackpoint);
        tracing::debug!(
            start_time = lap_ctx.start_time.as_deref().unwrap_or("-"),
            trackpoints = trackpoints.len(),
            "lap"
        );

        for point in trackpoints {
            records.push(Record::assemble(trackpoint::extract(point), &lap_ctx, &ctx));
        }
    }

    records
}
