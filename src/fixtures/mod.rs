// fixtures/mod.rs - Reusable test data builders
//
// Shared by the unit and integration test suites so every test talks
// about the same canonical enquiry shapes.

use crate::web_app::model::{ClassLevel, Enquiry, EnquiryInput, Excitement, NewEnquiry};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A fully filled-in form input, valid as-is.
pub fn sample_input() -> EnquiryInput {
    EnquiryInput {
        student_name: "Aarav Sharma".to_string(),
        parent_name: "Priya Sharma".to_string(),
        location: "Vashi".to_string(),
        phone: "9876543210".to_string(),
        class: Some(ClassLevel::Ukg),
        excited: Some(Excitement::Yes),
    }
}

/// A validated record ready for insertion, with a distinguishing name.
pub fn sample_new_enquiry(student_name: &str) -> NewEnquiry {
    NewEnquiry {
        student_name: student_name.to_string(),
        parent_name: "Priya Sharma".to_string(),
        location: "Vashi".to_string(),
        phone_number: "9876543210".to_string(),
        class: ClassLevel::Ukg,
        excitement: Excitement::Yes,
    }
}

/// A stored record as the store would return it.
pub fn sample_enquiry(student_name: &str, date_submitted: DateTime<Utc>) -> Enquiry {
    Enquiry {
        id: Uuid::new_v4(),
        student_name: student_name.to_string(),
        parent_name: "Priya Sharma".to_string(),
        location: "Vashi".to_string(),
        phone_number: "9876543210".to_string(),
        class: ClassLevel::Ukg,
        excitement: Some(Excitement::Yes),
        date_submitted,
    }
}
