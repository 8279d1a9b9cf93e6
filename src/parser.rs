use crate::error::{Error, Result};
use crate::types::{Legislator, SocialHandles, SocialIndex, SocialMediaRecord};

/// Parse the contents of legislators-current.yaml
pub fn parse_legislators(content: &str) -> Result<Vec<Legislator>> {
    serde_yaml::from_str(content).map_err(|source| Error::Parse {
        document: "legislators".to_string(),
        source,
    })
}

/// Parse the contents of legislators-social-media.yaml
pub fn parse_social_media(content: &str) -> Result<Vec<SocialMediaRecord>> {
    serde_yaml::from_str(content).map_err(|source| Error::Parse {
        document: "social media".to_string(),
        source,
    })
}

/// Index social media records by bioguide ID.
/// Records without a bioguide ID cannot be joined and are dropped.
pub fn build_social_index(records: Vec<SocialMediaRecord>) -> SocialIndex {
    let mut index = SocialIndex::with_capacity(records.len());
    for record in records {
        if let Some(bioguide) = record.id.bioguide {
            index.insert(bioguide, SocialHandles::from(record.social));
        }
    }
    index
}
