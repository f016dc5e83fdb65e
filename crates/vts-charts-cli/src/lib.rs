//! Command line front-end for vts-charts: CSV data in, HTML charts out.
pub mod cli;
pub mod config;
pub mod render;
