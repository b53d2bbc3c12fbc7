//! Domain types for Training Center (TCX) activity files.
//!
//! Every scalar is optional: a field whose element is missing from the
//! document stays `None`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::builder::{Node, Variant};

/// A complete TCX document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainingCenterDatabase {
    pub activities: Vec<Activity>,
}

impl TrainingCenterDatabase {
    /// Total number of laps over all activities.
    #[must_use]
    pub fn lap_count(&self) -> usize {
        self.activities.iter().map(|a| a.laps.len()).sum()
    }

    /// Total number of trackpoints over all activities.
    #[must_use]
    pub fn trackpoint_count(&self) -> usize {
        self.activities.iter().map(Activity::trackpoint_count).sum()
    }
}

/// One recorded activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Activity {
    /// From the `Sport` attribute (Running, Biking, Other).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,

    /// Activity identifier, by convention the start timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The recording device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,

    pub laps: Vec<Lap>,
}

impl Activity {
    #[must_use]
    pub fn trackpoint_count(&self) -> usize {
        self.laps.iter().map(Lap::trackpoint_count).sum()
    }
}

/// Device that recorded an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Creator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_major: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_minor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_major: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_minor: Option<u32>,
}

/// A lap within an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lap {
    /// From the `StartTime` attribute of `<Lap>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate_bpm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_heart_rate_bpm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_method: Option<String>,
    pub tracks: Vec<Track>,
}

impl Lap {
    #[must_use]
    pub fn trackpoint_count(&self) -> usize {
        self.tracks.iter().map(|t| t.trackpoints.len()).sum()
    }

    /// Trackpoints of all tracks, in document order.
    pub fn trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
        self.tracks.iter().flat_map(|t| t.trackpoints.iter())
    }
}

/// A continuous recording segment of a lap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    pub trackpoints: Vec<Trackpoint>,
}

/// A single sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trackpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude_degrees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude_degrees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_bpm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<u32>,
    /// `true` when the sensor reported `Present`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_state: Option<bool>,
}

impl Trackpoint {
    /// `(longitude, latitude)` when both are known.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.longitude_degrees?, self.latitude_degrees?))
    }
}

/// Wraps each TCX object type into [`TcxNode`] and implements the builder
/// traits for it.
macro_rules! tcx_nodes {
    ($($variant:ident),* $(,)?) => {
        /// Objects that can sit on the construction stack while a TCX file is built.
        #[derive(Debug, Clone, PartialEq)]
        pub enum TcxNode {
            $($variant($variant),)*
        }

        impl Node for TcxNode {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)*
                }
            }
        }

        $(
            impl Variant<TcxNode> for $variant {
                const KIND: &'static str = stringify!($variant);

                fn into_node(self) -> TcxNode {
                    TcxNode::$variant(self)
                }

                fn from_node(node: TcxNode) -> std::result::Result<Self, TcxNode> {
                    match node {
                        TcxNode::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }

                fn from_node_mut(node: &mut TcxNode) -> Option<&mut Self> {
                    match node {
                        TcxNode::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )*
    };
}

tcx_nodes!(TrainingCenterDatabase, Activity, Creator, Lap, Track, Trackpoint);

#[cfg(test)]
mod tests {
    use super::*;

    fn lap_with_points(count: usize) -> Lap {
        Lap {
            tracks: vec![Track {
                trackpoints: vec![Trackpoint::default(); count],
            }],
            ..Lap::default()
        }
    }

    #[test]
    fn test_counts() {
        let database = TrainingCenterDatabase {
            activities: vec![Activity {
                laps: vec![lap_with_points(2), lap_with_points(3)],
                ..Activity::default()
            }],
        };
        assert_eq!(database.lap_count(), 2);
        assert_eq!(database.trackpoint_count(), 5);
    }

    #[test]
    fn test_node_kind() {
        let node = Lap::default().into_node();
        assert_eq!(node.kind(), "Lap");
        assert!(Trackpoint::from_node(node).is_err());
    }

    #[test]
    fn test_position_needs_both_coordinates() {
        let mut point = Trackpoint {
            latitude_degrees: Some(46.0),
            ..Trackpoint::default()
        };
        assert_eq!(point.position(), None);
        point.longitude_degrees = Some(7.5);
        assert_eq!(point.position(), Some((7.5, 46.0)));
    }
}
