//! Advertiser programs and the publisher's applications to them.

use crate::traits::Fetch;

/// Advertiser programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Programs;

impl Fetch for Programs {
    const PATH: &'static str = "/programs";
    const FILTERS: &'static [&'static str] = &[
        "q",
        "startdate",
        "region",
        "partnership",
        "industry",
        "isexclusive",
        "items",
        "page",
    ];
}

/// The publisher's program applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramApplications;

impl Fetch for ProgramApplications {
    const PATH: &'static str = "/programapplications";
    const FILTERS: &'static [&'static str] = &["program", "adspace", "status", "items", "page"];
}
