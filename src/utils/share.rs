//! Social share links for a shortened URL.

use std::fmt;
use std::str::FromStr;

/// Share target offered next to a shortened URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
    Email,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Twitter,
        SharePlatform::Facebook,
        SharePlatform::LinkedIn,
        SharePlatform::Email,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "twitter",
            SharePlatform::Facebook => "facebook",
            SharePlatform::LinkedIn => "linkedin",
            SharePlatform::Email => "email",
        }
    }

    /// Builds the intent link sharing `url` on this platform.
    pub fn share_url(self, url: &str) -> String {
        let encoded = encode_component(url);
        match self {
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?url={encoded}&text=Check%20out%20this%20link!"
            ),
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={encoded}")
            }
            SharePlatform::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={encoded}")
            }
            SharePlatform::Email => {
                format!("mailto:?subject=Check%20out%20this%20link&body={encoded}")
            }
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SharePlatform::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown share platform '{s}'"))
    }
}

/// Percent-encodes `text` as a query component, leaving `!'()*` literal the
/// way browsers' `encodeURIComponent` does.
fn encode_component(text: &str) -> String {
    // A literal '%' is emitted as "%25", so these sequences only come from the marks.
    const MARKS: [(&str, &str); 5] = [
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];
    MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |acc, (escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

/// Share link for a platform identifier; unknown platforms get the URL itself.
pub fn share_url(platform: &str, url: &str) -> String {
    match platform.parse::<SharePlatform>() {
        Ok(platform) => platform.share_url(url),
        Err(_) => url.to_string(),
    }
}
