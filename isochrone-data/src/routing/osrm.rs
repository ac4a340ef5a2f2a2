//! OSRM API response types for the Route service.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// `code` is `"Ok"` on success; other values such as `"NoRoute"` or
/// `"InvalidQuery"` carry an optional `message`.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, fastest first.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A single route in a [`RouteResponse`].
#[derive(Debug, Deserialize)]
pub struct Route {
    /// Travel time in seconds.
    pub duration: f64,
    /// Route length in metres.
    pub distance: f64,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Check if OSRM reported that no route connects the coordinates.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        self.code == "NoRoute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{"duration": 1620.5, "distance": 21726.3, "weight": 1620.5}],
            "waypoints": []
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.is_ok());
        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].duration, 1620.5);
        assert_eq!(response.routes[0].distance, 21726.3);
    }

    #[test]
    fn deserialise_no_route_response() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert!(response.is_no_route());
        assert!(response.routes.is_empty());
        assert_eq!(
            response.message.as_deref(),
            Some("Impossible route between points")
        );
    }
}
