//! Team abbreviation matching.

/// True when `token` is exactly two or three uppercase ASCII letters.
///
/// No case folding happens here: `kc` is a name fragment, `KC` is a team.
pub fn is_team_token(token: &str) -> bool {
    (2..=3).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_uppercase())
}
