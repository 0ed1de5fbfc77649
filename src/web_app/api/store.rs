// web_app/api/store.rs - Enquiry persistence over site.enquiries

use crate::web_app::model::{ClassLevel, Enquiry, Excitement, NewEnquiry, SiteError};
use sqlx::{PgPool, Row};

fn map_row(row: &sqlx::postgres::PgRow) -> Result<Enquiry, SiteError> {
    let class_raw: String = row.get("class");
    let class = ClassLevel::parse(&class_raw)
        .ok_or_else(|| SiteError::store(format!("Unknown class value '{}'", class_raw)))?;

    let excitement_raw: Option<String> = row.get("excitement");
    let excitement = excitement_raw.as_deref().and_then(Excitement::parse);

    Ok(Enquiry {
        id: row.get("id"),
        student_name: row.get("student_name"),
        parent_name: row.get("parent_name"),
        location: row.get("location"),
        phone_number: row.get("phone_number"),
        class,
        excitement,
        date_submitted: row.get("date_submitted"),
    })
}

/// Insert one enquiry and return the stored record with the id and
/// timestamp the database assigned.
pub async fn insert_enquiry(pool: &PgPool, record: &NewEnquiry) -> Result<Enquiry, SiteError> {
    let sql = r#"
        INSERT INTO site.enquiries
            (student_name, parent_name, location, phone_number, class, excitement)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, student_name, parent_name, location, phone_number,
                  class, excitement, date_submitted
    "#;

    let row = sqlx::query(sql)
        .bind(&record.student_name)
        .bind(&record.parent_name)
        .bind(&record.location)
        .bind(&record.phone_number)
        .bind(record.class.as_str())
        .bind(record.excitement.as_str())
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            tracing::error!("Enquiry insert failed: {}", e);
            SiteError::store("Could not save the enquiry")
        })?;

    // RETURNING yields exactly one row for a successful insert; none
    // means the insert silently did nothing.
    match row {
        Some(row) => map_row(&row),
        None => Err(SiteError::store("Insert returned no record")),
    }
}

/// All enquiries, newest first. Equal timestamps fall back to
/// insertion order via the internal sequence column.
pub async fn list_enquiries(pool: &PgPool) -> Result<Vec<Enquiry>, SiteError> {
    let sql = r#"
        SELECT id, student_name, parent_name, location, phone_number,
               class, excitement, date_submitted
        FROM site.enquiries
        ORDER BY date_submitted DESC, seq DESC
    "#;

    let rows = sqlx::query(sql).fetch_all(pool).await.map_err(|e| {
        tracing::error!("Enquiry list failed: {}", e);
        SiteError::store("Could not load enquiries")
    })?;

    rows.iter().map(map_row).collect()
}
