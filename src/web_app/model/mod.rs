// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used throughout the application for type-safe
// communication between frontend and backend, plus the pure logic
// the admin dashboard runs client-side (search filter, CSV export,
// stat counts).

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Class a prospective student is enquiring for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLevel {
    Nursery,
    Lkg,
    Ukg,
    Playgroup,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 4] = [
        ClassLevel::Nursery,
        ClassLevel::Lkg,
        ClassLevel::Ukg,
        ClassLevel::Playgroup,
    ];

    /// Stored form, snake_case at the record-store boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLevel::Nursery => "nursery",
            ClassLevel::Lkg => "lkg",
            ClassLevel::Ukg => "ukg",
            ClassLevel::Playgroup => "playgroup",
        }
    }

    pub fn parse(value: &str) -> Option<ClassLevel> {
        match value {
            "nursery" => Some(ClassLevel::Nursery),
            "lkg" => Some(ClassLevel::Lkg),
            "ukg" => Some(ClassLevel::Ukg),
            "playgroup" => Some(ClassLevel::Playgroup),
            _ => None,
        }
    }

    /// Human-readable label for selects and table badges.
    pub fn label(&self) -> &'static str {
        match self {
            ClassLevel::Nursery => "Nursery",
            ClassLevel::Lkg => "LKG",
            ClassLevel::Ukg => "UKG",
            ClassLevel::Playgroup => "Playgroup",
        }
    }
}

impl std::fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Are you excited to join?" answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Excitement {
    #[default]
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "very-excited")]
    VeryExcited,
    #[serde(rename = "need-info")]
    NeedInfo,
}

impl Excitement {
    pub const ALL: [Excitement; 3] = [
        Excitement::Yes,
        Excitement::VeryExcited,
        Excitement::NeedInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Excitement::Yes => "yes",
            Excitement::VeryExcited => "very-excited",
            Excitement::NeedInfo => "need-info",
        }
    }

    pub fn parse(value: &str) -> Option<Excitement> {
        match value {
            "yes" => Some(Excitement::Yes),
            "very-excited" => Some(Excitement::VeryExcited),
            "need-info" => Some(Excitement::NeedInfo),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Excitement::Yes => "Yes",
            Excitement::VeryExcited => "Very Excited",
            Excitement::NeedInfo => "Need Info",
        }
    }
}

impl std::fmt::Display for Excitement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted enquiry record, as returned by the record store.
///
/// `id` and `date_submitted` are assigned by the store on insert and
/// never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: Uuid,
    pub student_name: String,
    pub parent_name: String,
    pub location: String,
    pub phone_number: String,
    pub class: ClassLevel,
    pub excitement: Option<Excitement>,
    pub date_submitted: DateTime<Utc>,
}

/// Raw form state, named the way the form fields are named.
///
/// This is the camelCase side of the boundary; `validate()` is the
/// explicit mapping into the snake_case persisted shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryInput {
    pub student_name: String,
    pub parent_name: String,
    pub location: String,
    pub phone: String,
    pub class: Option<ClassLevel>,
    pub excited: Option<Excitement>,
}

impl EnquiryInput {
    /// True while any required field is still empty; drives the submit
    /// button's disabled state.
    pub fn has_missing_fields(&self) -> bool {
        self.student_name.trim().is_empty()
            || self.parent_name.trim().is_empty()
            || self.location.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.class.is_none()
    }

    /// Trim and map into the persisted shape. Fails with a validation
    /// error before any network call when a required field is missing.
    pub fn validate(&self) -> Result<NewEnquiry, SiteError> {
        let class = match self.class {
            Some(class) if !self.has_missing_fields() => class,
            _ => {
                return Err(SiteError::Validation(
                    "Please fill in all required fields".to_string(),
                ))
            }
        };
        Ok(NewEnquiry {
            student_name: self.student_name.trim().to_string(),
            parent_name: self.parent_name.trim().to_string(),
            location: self.location.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            class,
            excitement: self.excited.unwrap_or_default(),
        })
    }
}

/// Validated, trimmed record ready for insertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub student_name: String,
    pub parent_name: String,
    pub location: String,
    pub phone_number: String,
    pub class: ClassLevel,
    pub excitement: Excitement,
}

impl NewEnquiry {
    /// Server-side re-check; the store never persists empty required
    /// fields even if a client skipped validation.
    pub fn is_complete(&self) -> bool {
        !self.student_name.trim().is_empty()
            && !self.parent_name.trim().is_empty()
            && !self.location.trim().is_empty()
            && !self.phone_number.trim().is_empty()
    }
}

/// Authenticated admin session, as far as this app observes it: a
/// bearer token plus the account email for display and logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub email: String,
}

/// Error taxonomy for the whole site.
///
/// All three kinds are caught at the page/form boundary and rendered
/// as a dismissible inline message; none may crash a page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum SiteError {
    /// Missing/empty required field, raised before any network call.
    #[error("{0}")]
    Validation(String),
    /// No session, invalid credentials, or auth transport failure.
    #[error("{0}")]
    Auth(String),
    /// Insert/list failure, or an empty result where data was expected.
    #[error("{0}")]
    Store(String),
}

impl SiteError {
    pub fn auth(msg: impl Into<String>) -> SiteError {
        SiteError::Auth(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> SiteError {
        SiteError::Store(msg.into())
    }

    /// Wire form used to carry the taxonomy through the server-fn
    /// boundary, which only transports strings.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }

    /// Inverse of `encode`. Unrecognized payloads (e.g. transport-level
    /// failures) degrade to a store error carrying the raw text.
    pub fn decode(raw: &str) -> SiteError {
        serde_json::from_str(raw).unwrap_or_else(|_| SiteError::Store(raw.to_string()))
    }
}

/// Case-insensitive substring search across student name, parent name,
/// location, phone and class. An empty query keeps every record.
pub fn filter_enquiries(all: &[Enquiry], query: &str) -> Vec<Enquiry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return all.to_vec();
    }
    all.iter()
        .filter(|e| {
            e.student_name.to_lowercase().contains(&needle)
                || e.parent_name.to_lowercase().contains(&needle)
                || e.location.to_lowercase().contains(&needle)
                || e.phone_number.contains(needle.as_str())
                || e.class.as_str().contains(&needle)
        })
        .cloned()
        .collect()
}

/// CSV column header, fixed order.
pub const CSV_HEADER: &str =
    "Student Name,Parent Name,Location,Phone,Class,Excitement,Date Submitted";

/// Serialize the given (already filtered) view as CSV.
///
/// Field values are written as-is; embedded commas are not escaped.
/// Known limitation inherited from the dashboard this replaces.
pub fn export_csv(rows: &[Enquiry]) -> String {
    let mut out = String::from(CSV_HEADER);
    for e in rows {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},{}",
            e.student_name,
            e.parent_name,
            e.location,
            e.phone_number,
            e.class.as_str(),
            e.excitement.map(|x| x.as_str()).unwrap_or(""),
            e.date_submitted.format("%Y-%m-%d"),
        ));
    }
    out
}

/// Enquiries submitted in the same calendar month (and year) as `now`.
pub fn submitted_this_month(all: &[Enquiry], now: DateTime<Utc>) -> usize {
    all.iter()
        .filter(|e| {
            e.date_submitted.month() == now.month() && e.date_submitted.year() == now.year()
        })
        .count()
}

/// Records answering "yes" or "very-excited".
pub fn excited_count(all: &[Enquiry]) -> usize {
    all.iter()
        .filter(|e| {
            matches!(
                e.excitement,
                Some(Excitement::Yes) | Some(Excitement::VeryExcited)
            )
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(student: &str, phone: &str, class: ClassLevel) -> Enquiry {
        Enquiry {
            id: Uuid::new_v4(),
            student_name: student.to_string(),
            parent_name: "Parent".to_string(),
            location: "Vashi".to_string(),
            phone_number: phone.to_string(),
            class,
            excitement: Some(Excitement::Yes),
            date_submitted: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn class_level_round_trip() {
        for class in ClassLevel::ALL {
            assert_eq!(ClassLevel::parse(class.as_str()), Some(class));
        }
        assert_eq!(ClassLevel::parse("kindergarten"), None);
    }

    #[test]
    fn excitement_round_trip_and_default() {
        for excitement in Excitement::ALL {
            assert_eq!(Excitement::parse(excitement.as_str()), Some(excitement));
        }
        assert_eq!(Excitement::default(), Excitement::Yes);
        assert_eq!(Excitement::parse(""), None);
    }

    #[test]
    fn input_serializes_camel_case() {
        let input = EnquiryInput {
            student_name: "Aria".to_string(),
            phone: "9999999999".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"studentName\""));
        assert!(json.contains("\"phone\""));
        assert!(!json.contains("student_name"));
    }

    #[test]
    fn validate_trims_and_maps() {
        let input = EnquiryInput {
            student_name: "  Aria ".to_string(),
            parent_name: "Kim".to_string(),
            location: " Vashi".to_string(),
            phone: "9999999999 ".to_string(),
            class: Some(ClassLevel::Lkg),
            excited: None,
        };
        let rec = input.validate().unwrap();
        assert_eq!(rec.student_name, "Aria");
        assert_eq!(rec.location, "Vashi");
        assert_eq!(rec.phone_number, "9999999999");
        assert_eq!(rec.class, ClassLevel::Lkg);
        // Excitement defaults to "yes" when the input omits it.
        assert_eq!(rec.excitement, Excitement::Yes);
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let mut input = EnquiryInput {
            student_name: "Aria".to_string(),
            parent_name: "Kim".to_string(),
            location: "Vashi".to_string(),
            phone: "9999999999".to_string(),
            class: Some(ClassLevel::Ukg),
            excited: Some(Excitement::NeedInfo),
        };
        assert!(input.validate().is_ok());

        input.parent_name = "   ".to_string();
        assert!(matches!(input.validate(), Err(SiteError::Validation(_))));

        input.parent_name = "Kim".to_string();
        input.class = None;
        assert!(input.has_missing_fields());
        assert!(matches!(input.validate(), Err(SiteError::Validation(_))));
    }

    #[test]
    fn error_encode_decode_round_trip() {
        for err in [
            SiteError::Validation("missing field".to_string()),
            SiteError::auth("not authenticated"),
            SiteError::store("insert failed"),
        ] {
            assert_eq!(SiteError::decode(&err.encode()), err);
        }
        // Arbitrary transport text degrades to a store error.
        assert_eq!(
            SiteError::decode("connection refused"),
            SiteError::Store("connection refused".to_string())
        );
    }

    #[test]
    fn filter_matches_all_five_fields() {
        let rows = vec![
            record("Aarav", "9876543210", ClassLevel::Ukg),
            record("Ananya", "9123456780", ClassLevel::Nursery),
        ];
        assert_eq!(filter_enquiries(&rows, "aarav").len(), 1);
        assert_eq!(filter_enquiries(&rows, "PARENT").len(), 2);
        assert_eq!(filter_enquiries(&rows, "vashi").len(), 2);
        assert_eq!(filter_enquiries(&rows, "9123").len(), 1);
        assert_eq!(filter_enquiries(&rows, "nursery").len(), 1);
        assert_eq!(filter_enquiries(&rows, "zzz").len(), 0);
    }

    #[test]
    fn filter_empty_query_keeps_everything() {
        let rows = vec![
            record("A", "1", ClassLevel::Lkg),
            record("B", "2", ClassLevel::Ukg),
        ];
        assert_eq!(filter_enquiries(&rows, ""), rows);
        assert_eq!(filter_enquiries(&rows, "   "), rows);
    }

    #[test]
    fn filter_is_idempotent_through_empty_refilter() {
        let rows = vec![
            record("Aarav", "9876543210", ClassLevel::Ukg),
            record("Ananya", "9123456780", ClassLevel::Nursery),
            record("Arjun", "9000000000", ClassLevel::Playgroup),
        ];
        // Filtering an already empty-string-filtered view by q equals
        // filtering the full set by q.
        let via_empty = filter_enquiries(&filter_enquiries(&rows, ""), "an");
        let direct = filter_enquiries(&rows, "an");
        assert_eq!(via_empty, direct);
        // And refiltering by the same query is a fixed point.
        assert_eq!(filter_enquiries(&direct, "an"), direct);
    }

    #[test]
    fn csv_header_is_exact() {
        assert_eq!(
            CSV_HEADER,
            "Student Name,Parent Name,Location,Phone,Class,Excitement,Date Submitted"
        );
        assert!(export_csv(&[]).lines().eq([CSV_HEADER]));
    }

    #[test]
    fn csv_row_count_matches_view() {
        let rows = vec![
            record("Aarav", "9876543210", ClassLevel::Ukg),
            record("Ananya", "9123456780", ClassLevel::Nursery),
        ];
        let csv = export_csv(&rows);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.lines().nth(1).unwrap().starts_with("Aarav,Parent,Vashi,"));
    }

    #[test]
    fn csv_does_not_escape_embedded_commas() {
        let mut row = record("Aarav", "987", ClassLevel::Ukg);
        row.location = "Vashi, Navi Mumbai".to_string();
        let csv = export_csv(&[row]);
        // Documented limitation: the comma splits the field.
        assert!(csv.lines().nth(1).unwrap().contains("Vashi, Navi Mumbai"));
        assert!(!csv.contains('"'));
    }

    #[test]
    fn csv_empty_excitement_is_blank_column() {
        let mut row = record("Aarav", "987", ClassLevel::Ukg);
        row.excitement = None;
        let csv = export_csv(&[row]);
        assert!(csv.lines().nth(1).unwrap().contains(",ukg,,"));
    }

    #[test]
    fn this_month_count_respects_year() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
        let mut in_month = record("A", "1", ClassLevel::Lkg);
        in_month.date_submitted = Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
        let mut last_year = record("B", "2", ClassLevel::Lkg);
        last_year.date_submitted = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
        let mut other_month = record("C", "3", ClassLevel::Lkg);
        other_month.date_submitted = Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap();

        let rows = vec![in_month, last_year, other_month];
        assert_eq!(submitted_this_month(&rows, now), 1);
    }

    #[test]
    fn excited_counts_yes_and_very_excited() {
        let mut a = record("A", "1", ClassLevel::Lkg);
        a.excitement = Some(Excitement::VeryExcited);
        let mut b = record("B", "2", ClassLevel::Lkg);
        b.excitement = Some(Excitement::NeedInfo);
        let mut c = record("C", "3", ClassLevel::Lkg);
        c.excitement = None;
        let d = record("D", "4", ClassLevel::Lkg); // yes

        assert_eq!(excited_count(&[a, b, c, d]), 2);
    }
}
