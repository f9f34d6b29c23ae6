//! Record → context-block serialization.
//!
//! Pure and deterministic: the same record always yields a byte-identical
//! string. Only scalar fields go into the aligned table; the two free-text
//! notes are excluded from it and appended verbatim under their own labels,
//! and the nested milestone/activity collections get list sections so they
//! never render as mangled inline structures.

use sr_domain::record::ProjectRecord;

const MILESTONES_LABEL: &str = "Key Milestones:";
const ACTIVITIES_LABEL: &str = "Recent Activities:";
const SAFETY_LABEL: &str = "Safety Incidents:";
const SOURCE_LABEL: &str = "Source of Data:";

/// Flatten the record into the context block supplied to the model.
///
/// Empty milestone/activity lists still emit their section header with no
/// rows beneath it; long text is never truncated.
pub fn serialize(record: &ProjectRecord) -> String {
    let scalars: [(&str, &str); 6] = [
        ("Project Name", &record.name),
        ("Project ID", &record.id),
        ("Status", &record.status),
        ("Overall Progress", &record.progress),
        ("Budget", &record.budget),
        ("Spent to Date", &record.spent_to_date),
    ];

    let key_width = scalars
        .iter()
        .map(|(k, _)| k.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (key, value) in scalars {
        out.push_str(&format!("{key:<key_width$}  {value}\n"));
    }

    out.push('\n');
    out.push_str(MILESTONES_LABEL);
    out.push('\n');
    for m in &record.milestones {
        out.push_str(&format!("- {}: {}\n", m.name, m.date));
    }

    out.push('\n');
    out.push_str(ACTIVITIES_LABEL);
    out.push('\n');
    for a in &record.activities {
        out.push_str(&format!("- {}: {}\n", a.date, a.description));
    }

    out.push('\n');
    out.push_str(SAFETY_LABEL);
    out.push('\n');
    out.push_str(&record.safety_incidents);
    out.push('\n');

    out.push('\n');
    out.push_str(SOURCE_LABEL);
    out.push('\n');
    out.push_str(&record.data_source);
    out.push('\n');

    out
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
