//! Test data factories for canvas-submit types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use canvas_submit::types::{Assignment, Course};
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::Path;

/// Course id used by the fixtures
pub const COURSE_ID: u64 = 53659;

/// Create the fixture course
pub fn make_course() -> Course {
    Course {
        id: COURSE_ID,
        name: "Programming for Data Science".to_string(),
        course_code: "DSCI 511".to_string(),
    }
}

/// Create an upload-capable assignment created on the given day of January 2024
pub fn make_upload_assignment(id: u64, name: &str, day: u32) -> Assignment {
    Assignment {
        id,
        name: name.to_string(),
        submission_types: vec!["online_upload".to_string()],
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap()),
    }
}

/// Create an assignment with specific submission types
pub fn make_assignment_with_types(id: u64, name: &str, types: &[&str]) -> Assignment {
    Assignment {
        id,
        name: name.to_string(),
        submission_types: types.iter().map(ToString::to_string).collect(),
        created_at: None,
    }
}

/// HW1 (101) and HW2 (102), both accepting uploads
pub fn make_homework_pair() -> Vec<Assignment> {
    vec![
        make_upload_assignment(101, "HW1", 8),
        make_upload_assignment(102, "HW2", 15),
    ]
}

/// Create empty-ish files with the given names in `dir`
pub fn touch_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), format!("contents of {name}")).unwrap();
    }
}
