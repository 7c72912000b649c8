pub mod attendance;
pub mod report;
pub mod tracker_config;
