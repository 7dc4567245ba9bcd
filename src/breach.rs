use std::time::Duration;

use sha1::{Digest, Sha1};
use tracing::warn;

/// Pwned Passwords range-query endpoint (k-anonymity model: only the first
/// five hex characters of the SHA-1 digest leave the machine).
const RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const PREFIX_LEN: usize = 5;

/// Checks whether a secret appears in the Pwned Passwords breach corpus.
///
/// Returns `true` only on a confirmed match. Any network-layer failure
/// (timeout, connection error, non-success status) is logged and reported as
/// `false`: "could not verify" is not the same as "breached", and it must
/// never surface as an error to the caller.
pub fn is_breached(secret: &str) -> bool {
    let digest = format!("{:X}", Sha1::digest(secret.as_bytes()));
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);

    match query_range(prefix) {
        Ok(body) => suffix_in_range_body(&body, suffix),
        Err(err) => {
            warn!("unable to check secret against breach database: {err}");
            false
        }
    }
}

fn query_range(prefix: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    client
        .get(format!("{RANGE_ENDPOINT}/{prefix}"))
        .send()?
        .error_for_status()?
        .text()
}

/// The response body is one `SUFFIX:COUNT` entry per line.
fn suffix_in_range_body(body: &str, suffix: &str) -> bool {
    body.lines()
        .filter_map(|line| line.split(':').next())
        .any(|candidate| candidate.trim().eq_ignore_ascii_case(suffix))
}
