use iamc_core::Route;
use serde::Serialize;

/// An action that could not navigate: the view it stayed on and why.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub route: Route,
    pub error: String,
}

impl Failure {
    pub fn new(route: impl Into<Route>, error: String) -> Self {
        Self {
            route: route.into(),
            error,
        }
    }
}
