// src/ui/widgets/mod.rs

pub mod footer;   // Key hints for the current state.
pub mod input;    // SSID / BSSID filter boxes.
pub mod results;  // Ranked AP table.
pub mod summary;  // Counts and the recommended AP.
