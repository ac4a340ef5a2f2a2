//! Isoline API response types.
//!
//! Only the first polygon's outer boundary is read. Boundaries arrive as
//! flexible polylines.

use serde::Deserialize;

/// Isoline API response.
#[derive(Debug, Deserialize)]
pub struct IsolineResponse {
    /// One entry per requested range.
    #[serde(default)]
    pub isolines: Vec<Isoline>,
}

/// Reachable area for one range value.
#[derive(Debug, Deserialize)]
pub struct Isoline {
    /// Disconnected components of the reachable area.
    #[serde(default)]
    pub polygons: Vec<IsolinePolygon>,
}

/// A single reachable component.
#[derive(Debug, Deserialize)]
pub struct IsolinePolygon {
    /// Outer boundary encoded as a flexible polyline.
    pub outer: String,
}

impl IsolineResponse {
    /// Encoded outer boundary of the first polygon of the first isoline.
    #[must_use]
    pub fn first_outer(&self) -> Option<&str> {
        self.isolines
            .first()
            .and_then(|isoline| isoline.polygons.first())
            .map(|polygon| polygon.outer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "departure": {"place": {"type": "place", "location": {"lat": 0.0, "lng": 0.0}}},
            "isolines": [{
                "range": {"type": "time", "value": 900},
                "polygons": [{"outer": "BFAAAg0mMg0mMAA_zmM_zmMA"}, {"outer": "BFAA"}]
            }]
        }"#;

        let response: IsolineResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.first_outer(), Some("BFAAAg0mMg0mMAA_zmM_zmMA"));
    }

    #[test]
    fn empty_response_has_no_outer_boundary() {
        let response: IsolineResponse = serde_json::from_str("{}").expect("should deserialise");
        assert!(response.first_outer().is_none());

        let response: IsolineResponse = serde_json::from_str(r#"{"isolines": [{"polygons": []}]}"#)
            .expect("should deserialise");
        assert!(response.first_outer().is_none());
    }
}
