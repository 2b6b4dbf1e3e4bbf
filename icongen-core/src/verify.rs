//! Read generated bitmaps back and compare their dimensions to the tables.

use std::fmt;
use std::path::Path;

use crate::targets::{plan, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    Missing,
    WrongSize { width: u32, height: u32 },
    Unreadable(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Missing => write!(f, "missing"),
            Status::WrongSize { width, height } => write!(f, "wrong size {}x{}", width, height),
            Status::Unreadable(e) => write!(f, "unreadable: {}", e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Check {
    pub target: Target,
    pub status: Status,
}

impl Check {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

pub fn check_target(target: &Target) -> Status {
    if !target.path.is_file() {
        return Status::Missing;
    }
    match image::image_dimensions(&target.path) {
        Ok((w, h)) if w == target.px && h == target.px => Status::Ok,
        Ok((width, height)) => Status::WrongSize { width, height },
        Err(e) => Status::Unreadable(e.to_string()),
    }
}

pub fn verify<P: AsRef<Path>>(root: P) -> Vec<Check> {
    plan(root)
        .into_iter()
        .map(|target| {
            let status = check_target(&target);
            Check { target, status }
        })
        .collect()
}
