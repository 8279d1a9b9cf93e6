use crate::types::ContactRow;

/// Order rows by state name, then seat (at-large, numbered districts, Senate),
/// then last and first name. The sort is stable.
pub fn sort_contacts(rows: &mut [ContactRow]) {
    rows.sort_by(|a, b| {
        a.state
            .cmp(&b.state)
            .then_with(|| a.district.cmp(&b.district))
            .then_with(|| a.last_name.cmp(&b.last_name))
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
}
