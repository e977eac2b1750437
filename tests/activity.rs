use tcx_flatten::pipeline::{activity, file, parse};
use tcx_flatten::types::record::Record;

fn sample_tcx() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2023-01-01T10:00:00Z</Id>
      <Lap StartTime="2023-01-01T10:00:00Z">
        <TotalTimeSeconds>5.0</TotalTimeSeconds>
        <DistanceMeters>12.0</DistanceMeters>
        <AverageHeartRateBpm><Value>148</Value></AverageHeartRateBpm>
        <Track>
          <Trackpoint>
            <Time>2023-01-01T10:00:00Z</Time>
            <Position>
              <LatitudeDegrees>1.0</LatitudeDegrees>
              <LongitudeDegrees>2.0</LongitudeDegrees>
            </Position>
            <HeartRateBpm><Value>150</Value></HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2023-01-01T10:00:05Z</Time>
          </Trackpoint>
        </Track>
      </Lap>
      <Creator><Name>Polar Vantage</Name></Creator>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
}

fn two_lap_tcx() -> &'static str {
    r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Biking">
      <Lap StartTime="2024-03-02T08:00:00Z">
        <Track><Trackpoint><Time>2024-03-02T08:00:00Z</Time></Trackpoint></Track>
      </Lap>
      <Lap StartTime="2024-03-02T08:10:00Z">
        <Track>
          <Trackpoint><Time>2024-03-02T08:10:00Z</Time></Trackpoint>
          <Trackpoint><Time>2024-03-02T08:10:01Z</Time></Trackpoint>
        </Track>
        <Track><Trackpoint><Time>2024-03-02T08:12:00Z</Time></Trackpoint></Track>
      </Lap>
      <Training VirtualPartner="false">
        <Plan Type="Workout" IntervalWorkout="false"><Name>Threshold intervals</Name></Plan>
      </Training>
    </Activity>
    <Activity Sport="Other">
      <Id>2024-03-03T08:00:00Z</Id>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
}

fn records(xml: &str, source_file: &str) -> Vec<Record> {
    let doc = parse::parse(xml.as_bytes()).expect("parse");
    file::process_document(&doc, source_file)
}

#[test]
fn two_trackpoints_share_lap_and_activity_context() {
    let rows = records(sample_tcx(), "runs/new_year.tcx");
    assert_eq!(rows.len(), 2);

    for row in &rows {
        assert_eq!(row.lap_start_time.as_deref(), Some("2023-01-01T10:00:00Z"));
        assert_eq!(row.sport.as_deref(), Some("Running"));
        assert_eq!(row.tcx_file, "runs/new_year.tcx");
    }

    assert_eq!(rows[0].timestamp.as_deref(), Some("2023-01-01T10:00:00Z"));
    assert_eq!(rows[0].heart_rate_bpm.as_deref(), Some("150"));
    assert_eq!(rows[0].latitude.as_deref(), Some("1.0"));
    assert_eq!(rows[0].longitude.as_deref(), Some("2.0"));

    assert_eq!(rows[1].timestamp.as_deref(), Some("2023-01-01T10:00:05Z"));
    assert_eq!(rows[1].heart_rate_bpm, None);
    assert_eq!(rows[1].latitude, None);
    assert_eq!(rows[1].longitude, None);
}

#[test]
fn creator_name_is_not_the_activity_name() {
    let rows = records(sample_tcx(), "a.tcx");
    assert!(rows.iter().all(|r| r.activity.is_none()));
}

#[test]
fn plan_name_after_laps_tags_every_row() {
    let rows = records(two_lap_tcx(), "b.tcx");
    assert_eq!(rows.len(), 4);
    assert!(rows
        .iter()
        .all(|r| r.activity.as_deref() == Some("Threshold intervals")));
    assert!(rows.iter().all(|r| r.sport.as_deref() == Some("Biking")));
}

#[test]
fn each_trackpoint_gets_its_own_lap_start() {
    let rows = records(two_lap_tcx(), "b.tcx");
    let starts: Vec<_> = rows.iter().map(|r| r.lap_start_time.as_deref()).collect();
    assert_eq!(
        starts,
        vec![
            Some("2024-03-02T08:00:00Z"),
            Some("2024-03-02T08:10:00Z"),
            Some("2024-03-02T08:10:00Z"),
            Some("2024-03-02T08:10:00Z"),
        ]
    );
}

#[test]
fn last_plan_name_wins() {
    let xml = r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities><Activity Sport="Running">
    <Training><Plan><Name>First</Name></Plan></Training>
    <Lap StartTime="s"><Track><Trackpoint><Time>t</Time></Trackpoint></Track></Lap>
    <Training><Plan><Name>Second</Name></Plan></Training>
  </Activity></Activities>
</TrainingCenterDatabase>"#;
    let doc = parse::parse(xml.as_bytes()).expect("parse");
    let ctx = activity::context(doc.activities()[0], "c.tcx");
    assert_eq!(ctx.name.as_deref(), Some("Second"));
    assert_eq!(ctx.sport.as_deref(), Some("Running"));
}

#[test]
fn trailing_empty_plan_name_clears_the_name() {
    let xml = r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities><Activity Sport="Running">
    <Training><Plan><Name>Tempo</Name></Plan></Training>
    <Training><Plan><Name/></Plan></Training>
  </Activity></Activities>
</TrainingCenterDatabase>"#;
    let doc = parse::parse(xml.as_bytes()).expect("parse");
    let ctx = activity::context(doc.activities()[0], "f.tcx");
    assert_eq!(ctx.name, None);
}

#[test]
fn activity_without_laps_yields_no_records() {
    let doc = parse::parse(two_lap_tcx().as_bytes()).expect("parse");
    let empty = doc.activities()[1];
    let rows = activity::walk(empty, "b.tcx");
    assert!(rows.is_empty());
}

#[test]
fn missing_sport_and_lap_start_are_none() {
    let xml = r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities><Activity><Lap><Track><Trackpoint><Time>t</Time></Trackpoint></Track></Lap></Activity></Activities>
</TrainingCenterDatabase>"#;
    let rows = records(xml, "d.tcx");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sport, None);
    assert_eq!(rows[0].lap_start_time, None);
    assert_eq!(rows[0].activity, None);
}

#[test]
fn document_without_activities_yields_no_records() {
    let xml = r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2"><Folders/></TrainingCenterDatabase>"#;
    assert!(records(xml, "e.tcx").is_empty());
}

#[test]
fn process_bytes_names_the_file_on_error() {
    let err = file::process_bytes(b"<TrainingCenterDatabase>", "broken.tcx").expect_err("should fail");
    assert_eq!(err.path(), "broken.tcx");
}
