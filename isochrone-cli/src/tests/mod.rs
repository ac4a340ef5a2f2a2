//! Shared test harness modules for the isochrone CLI.

use super::*;

mod helpers;
