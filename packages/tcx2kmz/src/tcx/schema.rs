//! Dispatch tables describing the TCX document shape.
//!
//! ```text
//! TrainingCenterDatabase
//! └── Activities
//!     └── Activity[@Sport]*          Id, Creator
//!         └── Lap[@StartTime]*       TotalTimeSeconds, DistanceMeters, ...
//!             └── Track*
//!                 └── Trackpoint*    Time, Position, HeartRateBpm, ...
//! ```
//!
//! Elements that are not listed here (extensions, notes, courses, ...) are
//! skipped together with their contents.

use std::sync::LazyLock;

use super::types::{Activity, Creator, Lap, TcxNode, Track, Trackpoint, TrainingCenterDatabase};
use crate::builder::{
    Attributes, DispatchTable, FieldHandler, GroupHandler, Merge, ObjectHandler, Variant,
};
use crate::config::TCX_ROOT_ELEMENT;
use crate::convert::{self, ConvertResult};

static SCHEMA: LazyLock<DispatchTable<TcxNode>> = LazyLock::new(build_schema);

/// The shared TCX schema, built on first use.
pub fn schema() -> &'static DispatchTable<TcxNode> {
    &SCHEMA
}

/// Build a fresh TCX schema keyed by the top-level element name.
#[must_use]
pub fn build_schema() -> DispatchTable<TcxNode> {
    DispatchTable::new().with(TCX_ROOT_ELEMENT, database_handler())
}

/// `Value` child shared by the heart rate wrappers.
fn bpm<P>(set: fn(&mut P, u32)) -> GroupHandler<TcxNode>
where
    P: Variant<TcxNode>,
{
    GroupHandler::new(
        DispatchTable::new().with("Value", FieldHandler::new(convert::integer::<u32>, set)),
    )
}

fn database_handler() -> ObjectHandler<TcxNode, TrainingCenterDatabase, TrainingCenterDatabase> {
    ObjectHandler::root(DispatchTable::new().with(
        "Activities",
        GroupHandler::new(DispatchTable::new().with("Activity", activity_handler())),
    ))
}

fn new_activity(attributes: &Attributes) -> ConvertResult<Activity> {
    Ok(Activity {
        sport: convert::attribute(attributes, "Sport", convert::text)?,
        ..Activity::default()
    })
}

fn activity_handler() -> ObjectHandler<TcxNode, TrainingCenterDatabase, Activity> {
    ObjectHandler::from_attributes(
        new_activity,
        Merge::Append(|database: &mut TrainingCenterDatabase| &mut database.activities),
        DispatchTable::new()
            .with(
                "Id",
                FieldHandler::new(convert::text, |a: &mut Activity, v| a.id = Some(v)),
            )
            .with("Lap", lap_handler())
            .with("Creator", creator_handler()),
    )
}

fn creator_handler() -> ObjectHandler<TcxNode, Activity, Creator> {
    let version: DispatchTable<TcxNode> = DispatchTable::new()
        .with(
            "VersionMajor",
            FieldHandler::new(convert::integer::<u32>, |c: &mut Creator, v| {
                c.version_major = Some(v);
            }),
        )
        .with(
            "VersionMinor",
            FieldHandler::new(convert::integer::<u32>, |c: &mut Creator, v| {
                c.version_minor = Some(v);
            }),
        )
        .with(
            "BuildMajor",
            FieldHandler::new(convert::integer::<u32>, |c: &mut Creator, v| {
                c.build_major = Some(v);
            }),
        )
        .with(
            "BuildMinor",
            FieldHandler::new(convert::integer::<u32>, |c: &mut Creator, v| {
                c.build_minor = Some(v);
            }),
        );

    ObjectHandler::new(
        Merge::Replace(|activity: &mut Activity, creator| activity.creator = Some(creator)),
        DispatchTable::new()
            .with(
                "Name",
                FieldHandler::new(convert::text, |c: &mut Creator, v| c.name = Some(v)),
            )
            .with(
                "UnitId",
                FieldHandler::new(convert::integer::<u64>, |c: &mut Creator, v| {
                    c.unit_id = Some(v);
                }),
            )
            .with(
                "ProductID",
                FieldHandler::new(convert::integer::<u32>, |c: &mut Creator, v| {
                    c.product_id = Some(v);
                }),
            )
            .with("Version", GroupHandler::new(version)),
    )
}

fn new_lap(attributes: &Attributes) -> ConvertResult<Lap> {
    Ok(Lap {
        start_time: convert::attribute(attributes, "StartTime", convert::timestamp)?,
        ..Lap::default()
    })
}

fn lap_handler() -> ObjectHandler<TcxNode, Activity, Lap> {
    ObjectHandler::from_attributes(
        new_lap,
        Merge::Append(|activity: &mut Activity| &mut activity.laps),
        DispatchTable::new()
            .with(
                "TotalTimeSeconds",
                FieldHandler::new(convert::float, |l: &mut Lap, v| {
                    l.total_time_seconds = Some(v);
                }),
            )
            .with(
                "DistanceMeters",
                FieldHandler::new(convert::float, |l: &mut Lap, v| {
                    l.distance_meters = Some(v);
                }),
            )
            .with(
                "MaximumSpeed",
                FieldHandler::new(convert::float, |l: &mut Lap, v| l.maximum_speed = Some(v)),
            )
            .with(
                "Calories",
                FieldHandler::new(convert::integer::<u32>, |l: &mut Lap, v| {
                    l.calories = Some(v);
                }),
            )
            .with(
                "AverageHeartRateBpm",
                bpm(|l: &mut Lap, v| l.average_heart_rate_bpm = Some(v)),
            )
            .with(
                "MaximumHeartRateBpm",
                bpm(|l: &mut Lap, v| l.maximum_heart_rate_bpm = Some(v)),
            )
            .with(
                "Intensity",
                FieldHandler::new(convert::text, |l: &mut Lap, v| l.intensity = Some(v)),
            )
            .with(
                "TriggerMethod",
                FieldHandler::new(convert::text, |l: &mut Lap, v| l.trigger_method = Some(v)),
            )
            .with("Track", track_handler()),
    )
}

fn track_handler() -> ObjectHandler<TcxNode, Lap, Track> {
    ObjectHandler::new(
        Merge::Append(|lap: &mut Lap| &mut lap.tracks),
        DispatchTable::new().with("Trackpoint", trackpoint_handler()),
    )
}

fn trackpoint_handler() -> ObjectHandler<TcxNode, Track, Trackpoint> {
    let position: DispatchTable<TcxNode> = DispatchTable::new()
        .with(
            "LatitudeDegrees",
            FieldHandler::new(convert::float, |p: &mut Trackpoint, v| {
                p.latitude_degrees = Some(v);
            }),
        )
        .with(
            "LongitudeDegrees",
            FieldHandler::new(convert::float, |p: &mut Trackpoint, v| {
                p.longitude_degrees = Some(v);
            }),
        );

    ObjectHandler::new(
        Merge::Append(|track: &mut Track| &mut track.trackpoints),
        DispatchTable::new()
            .with(
                "Time",
                FieldHandler::new(convert::timestamp, |p: &mut Trackpoint, v| {
                    p.time = Some(v);
                }),
            )
            .with("Position", GroupHandler::new(position))
            .with(
                "AltitudeMeters",
                FieldHandler::new(convert::float, |p: &mut Trackpoint, v| {
                    p.altitude_meters = Some(v);
                }),
            )
            .with(
                "DistanceMeters",
                FieldHandler::new(convert::float, |p: &mut Trackpoint, v| {
                    p.distance_meters = Some(v);
                }),
            )
            .with(
                "HeartRateBpm",
                bpm(|p: &mut Trackpoint, v| p.heart_rate_bpm = Some(v)),
            )
            .with(
                "Cadence",
                FieldHandler::new(convert::integer::<u32>, |p: &mut Trackpoint, v| {
                    p.cadence = Some(v);
                }),
            )
            .with(
                "SensorState",
                FieldHandler::new(convert::presence, |p: &mut Trackpoint, v| {
                    p.sensor_state = Some(v);
                }),
            ),
    )
}
