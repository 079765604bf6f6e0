//! Venue and menu records.
//!
//! Mirrors the JSON produced by the venue search API fetcher: venues hold
//! menus, menus hold sections, sections hold subsections and subsections hold
//! item `contents`. Every level is optional; absence means "contributes no
//! items", never an error.

pub mod source;
pub mod venue;

pub use source::{JsonFileSource, LoadReport, VenueSource};
pub use venue::{Menu, MenuItem, MenuOption, OptionGroup, Section, Subsection, Venue};
