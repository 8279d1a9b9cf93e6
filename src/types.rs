use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A current member of Congress from legislators-current.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct Legislator {
    pub id: LegislatorId,
    #[serde(default)]
    pub name: LegislatorName,
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl Legislator {
    /// The most recent term, which is the last entry in the list
    pub fn current_term(&self) -> Option<&Term> {
        self.terms.last()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegislatorId {
    pub bioguide: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegislatorName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

/// Chamber a term was served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    Sen,
    Rep,
}

/// One term of office
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub chamber: Chamber,
    pub state: String,
    pub district: Option<u32>,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub url: String,
    pub end: Option<NaiveDate>,
}

/// An entry from legislators-social-media.yaml
#[derive(Debug, Clone, Deserialize)]
pub struct SocialMediaRecord {
    #[serde(default)]
    pub id: SocialMediaId,
    #[serde(default)]
    pub social: SocialAccounts,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialMediaId {
    pub bioguide: Option<String>,
}

/// Raw account fields. Some handles are published as bare numbers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialAccounts {
    #[serde(default, deserialize_with = "handle")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "handle")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "handle")]
    pub youtube: Option<String>,
    #[serde(default, deserialize_with = "handle")]
    pub youtube_id: Option<String>,
    #[serde(default, deserialize_with = "handle")]
    pub instagram: Option<String>,
}

fn handle<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        Some(serde_yaml::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Normalized handles for one legislator. Absent accounts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialHandles {
    pub twitter: String,
    pub facebook: String,
    /// Channel ID when published, otherwise the channel username
    pub youtube: String,
    pub instagram: String,
}

impl From<SocialAccounts> for SocialHandles {
    fn from(social: SocialAccounts) -> Self {
        Self {
            twitter: social.twitter.unwrap_or_default(),
            facebook: social.facebook.unwrap_or_default(),
            youtube: social.youtube_id.or(social.youtube).unwrap_or_default(),
            instagram: social.instagram.unwrap_or_default(),
        }
    }
}

/// Lookup from bioguide ID to social handles
pub type SocialIndex = HashMap<String, SocialHandles>;

/// Seat a legislator holds. Ordering puts at-large and numbered House seats
/// (ascending) ahead of the Senate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum District {
    /// House seat; number 0 is an at-large seat
    House { state: String, number: u32 },
    Senate,
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            District::Senate => write!(f, "Senate"),
            District::House { state, number: 0 } => write!(f, "{}-AL", state),
            District::House { state, number } => write!(f, "{}-{:02}", state, number),
        }
    }
}

impl Serialize for District {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One output line of the contact list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    #[serde(rename = "State")]
    pub state: String,
    pub name: String,
    pub party: String,
    pub district: District,
    pub phone: String,
    pub url: String,
    pub twitter: String,
    pub facebook: String,
    pub youtube: String,
    pub instagram: String,
    #[serde(skip)]
    pub first_name: String,
    #[serde(skip)]
    pub last_name: String,
}
