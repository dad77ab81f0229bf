//! Export tessellated point sequences to other formats
//!
//! This module provides functionality to export point sequences for
//! visualization, sharing, or further processing.
//!
//! # Available Export Formats
//!
//! - SVG path data - Export polylines as `M … L …` path strings

pub mod svg_path;
