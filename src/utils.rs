use crate::types::{ProfileRecord, ProfileTableRow};

/// Formats a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Turns a record into `field | value` rows, skipping absent fields.
pub fn profile_table_rows(record: &ProfileRecord) -> Vec<ProfileTableRow> {
    let mut rows = vec![
        row("ID", record.id.clone()),
        row("Email", record.email.clone()),
    ];

    if let Some(age) = record.age {
        rows.push(row("Age", format_number(age)));
    }
    if let Some(weight) = record.weight {
        rows.push(row("Weight", format!("{} kg", format_number(weight))));
    }
    if let Some(height) = record.height {
        rows.push(row("Height", format!("{} m", format_number(height))));
    }
    if let Some(sex) = record.biological_sex {
        rows.push(row("Biological Sex", sex.to_string()));
    }
    if let Some(dob) = &record.date_of_birth {
        rows.push(row("Date of Birth", dob.clone()));
    }

    rows
}

fn row(field: &str, value: String) -> ProfileTableRow {
    ProfileTableRow {
        field: field.to_string(),
        value,
    }
}
