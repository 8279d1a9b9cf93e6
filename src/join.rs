use crate::error::{Error, Result};
use crate::states::state_name;
use crate::types::{Chamber, ContactRow, District, Legislator, SocialIndex};
use chrono::NaiveDate;

/// Short party code used in the contact list
pub fn party_code(party: &str) -> &str {
    match party {
        "Republican" => "R",
        "Democrat" => "D",
        "Independent" => "I",
        other => other,
    }
}

/// Build the contact row for one legislator.
///
/// Returns `Ok(None)` for a legislator without any terms.
pub fn contact_row(legislator: &Legislator, social: &SocialIndex) -> Result<Option<ContactRow>> {
    let bioguide = &legislator.id.bioguide;
    let Some(term) = legislator.current_term() else {
        return Ok(None);
    };

    let state_code = term.state.trim().to_uppercase();
    let state = state_name(&state_code).ok_or_else(|| Error::UnknownState {
        code: term.state.clone(),
        bioguide: bioguide.clone(),
    })?;

    let district = match term.chamber {
        Chamber::Sen => District::Senate,
        Chamber::Rep => {
            let number = term.district.ok_or_else(|| Error::MissingDistrict {
                bioguide: bioguide.clone(),
            })?;
            District::House {
                state: state_code,
                number,
            }
        }
    };

    let handles = social.get(bioguide).cloned().unwrap_or_default();

    Ok(Some(ContactRow {
        state: state.to_string(),
        name: legislator.full_name(),
        party: party_code(&term.party).to_string(),
        district,
        phone: term.phone.clone(),
        url: term.url.clone(),
        twitter: handles.twitter,
        facebook: handles.facebook,
        youtube: handles.youtube,
        instagram: handles.instagram,
        first_name: legislator.name.first.clone(),
        last_name: legislator.name.last.clone(),
    }))
}

/// Join every legislator with their social handles.
///
/// With a cutoff, legislators whose last term ended before it are left out.
pub fn join_contacts(
    legislators: &[Legislator],
    social: &SocialIndex,
    cutoff: Option<NaiveDate>,
) -> Result<Vec<ContactRow>> {
    let mut rows = Vec::with_capacity(legislators.len());

    for legislator in legislators {
        if let (Some(cutoff), Some(end)) = (cutoff, legislator.current_term().and_then(|t| t.end)) {
            if end < cutoff {
                tracing::debug!(
                    bioguide = %legislator.id.bioguide,
                    %end,
                    "Skipping legislator whose term has ended"
                );
                continue;
            }
        }

        match contact_row(legislator, social)? {
            Some(row) => rows.push(row),
            None => tracing::warn!(
                bioguide = %legislator.id.bioguide,
                "Skipping legislator with no terms"
            ),
        }
    }

    Ok(rows)
}
