//! Rendering parsed activities as KML `gx:Track`s.

use chrono::{DateTime, Utc};

use super::element::Element;
use super::Document;
use crate::config::KML_TIMESTAMP_FORMAT;
use crate::tcx::{Activity, Lap, Trackpoint, TrainingCenterDatabase};

/// `id` of the `Schema` declaring the per-sample arrays.
const SAMPLE_SCHEMA_ID: &str = "trackpoint";

/// A per-sample value carried next to a track's coordinates.
struct SampleField {
    name: &'static str,
    display_name: &'static str,
    value: fn(&Trackpoint) -> Option<u32>,
}

const SAMPLE_FIELDS: [SampleField; 2] = [
    SampleField {
        name: "heartrate",
        display_name: "Heart Rate",
        value: |point| point.heart_rate_bpm,
    },
    SampleField {
        name: "cadence",
        display_name: "Cadence",
        value: |point| point.cadence,
    },
];

/// One `Folder` per activity, one `Placemark` per lap.
///
/// Laps without a single timed and positioned trackpoint (treadmill runs,
/// indoor rides) are left out.
#[must_use]
pub fn from_activities(database: &TrainingCenterDatabase) -> Document {
    let folders = database.activities.iter().map(activity_folder);
    Document::new(
        Element::new("Document")
            .child(sample_schema())
            .children(folders.map(Some)),
    )
}

/// Declares the `gx:SimpleArrayData` arrays used by the tracks.
fn sample_schema() -> Element {
    let fields = SAMPLE_FIELDS.iter().map(|field| {
        Some(
            Element::new("gx:SimpleArrayField")
                .attr("name", field.name)
                .attr("type", "int")
                .child(Element::simple("displayName", field.display_name)),
        )
    });
    Element::new("Schema")
        .attr("id", SAMPLE_SCHEMA_ID)
        .children(fields)
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.format(KML_TIMESTAMP_FORMAT).to_string()
}

fn activity_name(activity: &Activity) -> String {
    match (&activity.sport, &activity.id) {
        (Some(sport), Some(id)) => format!("{sport} {id}"),
        (Some(name), None) | (None, Some(name)) => name.clone(),
        (None, None) => "Activity".to_string(),
    }
}

fn activity_folder(activity: &Activity) -> Element {
    let placemarks = activity
        .laps
        .iter()
        .enumerate()
        .map(|(index, lap)| lap_placemark(index + 1, lap));

    Element::new("Folder")
        .child(Element::simple("name", activity_name(activity)))
        .children(placemarks)
}

/// A timed, positioned trackpoint.
type Sample<'a> = (&'a DateTime<Utc>, (f64, f64), &'a Trackpoint);

/// Samples that can be placed on a map.
fn positioned(lap: &Lap) -> Vec<Sample<'_>> {
    lap.trackpoints()
        .filter_map(|point| Some((point.time.as_ref()?, point.position()?, point)))
        .collect()
}

fn lap_placemark(number: usize, lap: &Lap) -> Option<Element> {
    let samples = positioned(lap);
    let (first, last) = (samples.first()?, samples.last()?);

    let time_span = Element::new("TimeSpan")
        .child(Element::simple("begin", format_time(first.0)))
        .child(Element::simple("end", format_time(last.0)));

    let mut track = Element::new("gx:Track");
    for (time, _, _) in &samples {
        track.push(Element::simple("when", format_time(time)));
    }
    for (_, (longitude, latitude), point) in &samples {
        let altitude = point.altitude_meters.unwrap_or(0.0);
        track.push(Element::simple(
            "gx:coord",
            format!("{longitude} {latitude} {altitude}"),
        ));
    }

    if let Some(extended_data) = sample_data(&samples) {
        track.push(extended_data);
    }

    Some(
        Element::new("Placemark")
            .child(Element::simple("name", format!("Lap {number}")))
            .child(time_span)
            .child(track),
    )
}

/// `ExtendedData` with one `gx:value` per sample for each field that any
/// sample carries. Samples without the value get an empty `gx:value` so the
/// arrays stay aligned with the `when` elements.
fn sample_data(samples: &[Sample<'_>]) -> Option<Element> {
    let arrays: Vec<Element> = SAMPLE_FIELDS
        .iter()
        .filter_map(|field| {
            let values: Vec<Option<u32>> = samples
                .iter()
                .map(|(_, _, point)| (field.value)(*point))
                .collect();
            if values.iter().all(Option::is_none) {
                return None;
            }
            let values = values.into_iter().map(|value| {
                Some(Element::simple(
                    "gx:value",
                    value.map(|v| v.to_string()).unwrap_or_default(),
                ))
            });
            Some(
                Element::new("gx:SimpleArrayData")
                    .attr("name", field.name)
                    .children(values),
            )
        })
        .collect();

    if arrays.is_empty() {
        return None;
    }
    let schema_data = Element::new("SchemaData")
        .attr("schemaUrl", format!("#{SAMPLE_SCHEMA_ID}"))
        .children(arrays.into_iter().map(Some));
    Some(Element::new("ExtendedData").child(schema_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tcx::Track;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn point(second: u32, position: Option<(f64, f64)>) -> Trackpoint {
        Trackpoint {
            time: Utc.with_ymd_and_hms(2009, 9, 13, 10, 0, second).single(),
            latitude_degrees: position.map(|p| p.1),
            longitude_degrees: position.map(|p| p.0),
            altitude_meters: (second == 0).then_some(512.5),
            heart_rate_bpm: (second == 0).then_some(140),
            ..Trackpoint::default()
        }
    }

    #[test]
    fn test_lap_placemark() {
        let lap = Lap {
            tracks: vec![Track {
                trackpoints: vec![
                    point(0, Some((7.5, 46.0))),
                    point(1, None),
                    point(2, Some((7.25, 46.5))),
                ],
            }],
            ..Lap::default()
        };

        let placemark = lap_placemark(2, &lap).unwrap();
        assert_eq!(
            placemark.to_string(),
            "<Placemark><name>Lap 2</name>\
             <TimeSpan><begin>2009-09-13T10:00:00Z</begin><end>2009-09-13T10:00:02Z</end></TimeSpan>\
             <gx:Track><when>2009-09-13T10:00:00Z</when><when>2009-09-13T10:00:02Z</when>\
             <gx:coord>7.5 46 512.5</gx:coord><gx:coord>7.25 46.5 0</gx:coord>\
             <ExtendedData><SchemaData schemaUrl=\"#trackpoint\">\
             <gx:SimpleArrayData name=\"heartrate\"><gx:value>140</gx:value><gx:value></gx:value></gx:SimpleArrayData>\
             </SchemaData></ExtendedData></gx:Track>\
             </Placemark>"
        );
    }

    #[test]
    fn test_sample_data_skipped_without_values() {
        let point = Trackpoint::default();
        let time = Utc.with_ymd_and_hms(2009, 9, 13, 10, 0, 0).unwrap();
        assert!(sample_data(&[(&time, (7.5, 46.0), &point)]).is_none());
    }

    #[test]
    fn test_sample_schema() {
        assert_eq!(
            sample_schema().to_string(),
            "<Schema id=\"trackpoint\">\
             <gx:SimpleArrayField name=\"heartrate\" type=\"int\"><displayName>Heart Rate</displayName></gx:SimpleArrayField>\
             <gx:SimpleArrayField name=\"cadence\" type=\"int\"><displayName>Cadence</displayName></gx:SimpleArrayField>\
             </Schema>"
        );
    }

    #[test]
    fn test_lap_without_positions_is_skipped() {
        let lap = Lap {
            tracks: vec![Track {
                trackpoints: vec![point(0, None)],
            }],
            ..Lap::default()
        };
        assert!(lap_placemark(1, &lap).is_none());
    }

    #[test]
    fn test_activity_name() {
        let mut activity = Activity {
            sport: Some("Running".into()),
            id: Some("2009-09-13T10:00:00Z".into()),
            ..Activity::default()
        };
        assert_eq!(activity_name(&activity), "Running 2009-09-13T10:00:00Z");
        activity.id = None;
        assert_eq!(activity_name(&activity), "Running");
        activity.sport = None;
        assert_eq!(activity_name(&activity), "Activity");
    }
}
