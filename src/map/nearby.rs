// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nearest-activity search for map clicks.

use geo::Coord;

use super::route::decode_route;
use crate::models::{Activity, NearbyActivity};

/// Maximum number of activities returned for one click.
pub const NEARBY_LIMIT: usize = 5;

/// Find the activities whose route passes closest to a clicked point.
///
/// Each activity is tagged with the minimum planar Euclidean distance (in
/// raw degrees — intentionally not geodesic, matching the map behavior)
/// from the point to any coordinate of its decoded route. The result is
/// sorted ascending by that distance and capped at [`NEARBY_LIMIT`]. The
/// sort is stable, so ties keep input order. Activities with an empty
/// route sort last.
///
/// Linear scan: at tens to low hundreds of activities a spatial index
/// would not pay for itself.
pub fn find_nearby_activities(point: Coord<f64>, activities: &[Activity]) -> Vec<NearbyActivity> {
    let mut nearby: Vec<NearbyActivity> = activities
        .iter()
        .map(|activity| NearbyActivity {
            distance_from_click: route_distance(point, &activity.map.summary_polyline),
            activity: activity.clone(),
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_from_click.total_cmp(&b.distance_from_click));
    nearby.truncate(NEARBY_LIMIT);
    nearby
}

/// Minimum distance from a point to any coordinate of the encoded route.
/// An empty route yields positive infinity.
fn route_distance(point: Coord<f64>, encoded: &str) -> f64 {
    decode_route(encoded)
        .coords()
        .map(|c| (c.x - point.x).hypot(c.y - point.y))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::route::POLYLINE_PRECISION;
    use geo::LineString;

    fn encode(coords: &[(f64, f64)]) -> String {
        let line = LineString::from(
            coords
                .iter()
                .map(|&(lng, lat)| Coord { x: lng, y: lat })
                .collect::<Vec<_>>(),
        );
        polyline::encode_coordinates(line, POLYLINE_PRECISION).unwrap()
    }

    fn activity(id: u64, coords: &[(f64, f64)]) -> Activity {
        Activity::new(id, &format!("Ride {id}"), 1000.0, "2024-06-01T08:00:00Z", &encode(coords))
    }

    #[test]
    fn test_near_activity_sorts_first() {
        let activities = vec![
            activity(1, &[(2.36, 48.86), (2.37, 48.87)]),
            activity(2, &[(3.50, 49.90)]),
        ];
        let point = Coord { x: 2.36, y: 48.86 };

        let nearby = find_nearby_activities(point, &activities);
        let ids: Vec<u64> = nearby.iter().map(|n| n.activity.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(nearby[0].distance_from_click < nearby[1].distance_from_click);
    }

    #[test]
    fn test_empty_collection() {
        let point = Coord { x: 2.36, y: 48.86 };
        assert!(find_nearby_activities(point, &[]).is_empty());
    }

    #[test]
    fn test_result_capped_and_sorted() {
        let activities: Vec<Activity> = (1..=8)
            .map(|i| activity(i, &[(2.36 + i as f64 * 0.01, 48.86)]))
            .collect();
        let point = Coord { x: 2.36, y: 48.86 };

        let nearby = find_nearby_activities(point, &activities);
        assert_eq!(nearby.len(), NEARBY_LIMIT);
        for pair in nearby.windows(2) {
            assert!(pair[0].distance_from_click <= pair[1].distance_from_click);
        }
        // The five closest are the five lowest offsets, in order.
        let ids: Vec<u64> = nearby.iter().map(|n| n.activity.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_route_sorts_last() {
        let activities = vec![
            Activity::new(1, "No route", 0.0, "2024-06-01T08:00:00Z", ""),
            activity(2, &[(2.40, 48.90)]),
        ];
        let point = Coord { x: 2.36, y: 48.86 };

        let nearby = find_nearby_activities(point, &activities);
        let ids: Vec<u64> = nearby.iter().map(|n| n.activity.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(nearby[1].distance_from_click.is_infinite());
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Same single-point route: identical distances.
        let activities = vec![
            activity(10, &[(2.40, 48.90)]),
            activity(20, &[(2.40, 48.90)]),
        ];
        let point = Coord { x: 2.36, y: 48.86 };

        let nearby = find_nearby_activities(point, &activities);
        let ids: Vec<u64> = nearby.iter().map(|n| n.activity.id).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_distance_is_planar_euclidean() {
        let activities = vec![activity(1, &[(2.39, 48.90)])];
        let point = Coord { x: 2.36, y: 48.86 };

        let nearby = find_nearby_activities(point, &activities);
        let expected = (0.03f64.powi(2) + 0.04f64.powi(2)).sqrt();
        assert!((nearby[0].distance_from_click - expected).abs() < 1e-5);
    }
}
