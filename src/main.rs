use clap::Parser;
use congress_contacts::logging::init_logging;
use congress_contacts::prelude::*;

/// Build a CSV contact list of the current members of Congress.
///
/// Downloads legislators-current.yaml and legislators-social-media.yaml from
/// the unitedstates/congress-legislators project and writes
/// congressional_contacts.csv, sorted by state and district.
///
/// Optional environment variables: CONGRESS_CONTACTS_LEGISLATORS_URL,
/// CONGRESS_CONTACTS_SOCIAL_MEDIA_URL, CONGRESS_CONTACTS_OUTPUT,
/// CONGRESS_CONTACTS_TIMEOUT_SECS, CONGRESS_CONTACTS_TERM_CUTOFF, RUST_LOG.
#[derive(Parser, Debug)]
#[command(name = "congress-contacts")]
#[command(version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    init_logging();

    let config = Config::from_env()?;
    let processor = ContactProcessor::from_config(config)?;
    let summary = processor.run()?;

    eprintln!(
        "Successfully created {} with {} entries",
        summary.output.display(),
        summary.rows
    );

    Ok(())
}
