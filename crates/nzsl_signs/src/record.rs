//! Sign dictionary records.
//!
//! Mirrors the per-sign JSON documents published by NZSL Signbank. Only the
//! fields the translator uses are kept; everything else is ignored on load.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a sign in the dictionary.
///
/// Accepts either a JSON number or a numeric string on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SignId(pub u64);

impl<'de> Deserialize<'de> for SignId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(u64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Ok(Self(n)),
            Repr::Str(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid sign id: {s:?}"))),
        }
    }
}

impl fmt::Display for SignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Written glosses attached to a sign.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gloss {
    /// Primary English glosses.
    #[serde(default, deserialize_with = "non_blank_strings")]
    pub english: Vec<String>,
    /// Secondary English glosses.
    #[serde(default, deserialize_with = "non_blank_strings")]
    pub english_secondary: Vec<String>,
    /// Te reo Māori glosses.
    #[serde(default, deserialize_with = "non_blank_strings")]
    pub maori: Vec<String>,
}

/// One sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRecord {
    /// Dictionary identifier.
    pub nzsl_id: SignId,
    /// Written glosses.
    #[serde(default)]
    pub gloss: Gloss,
    /// Video file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Illustration file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SignRecord {
    /// Creates a record with one primary English gloss.
    #[must_use]
    pub fn new(id: u64, english: impl Into<String>) -> Self {
        Self {
            nzsl_id: SignId(id),
            gloss: Gloss {
                english: vec![english.into()],
                ..Gloss::default()
            },
            video: None,
            image: None,
        }
    }

    /// Builder method to add a secondary English gloss.
    #[must_use]
    pub fn with_secondary(mut self, word: impl Into<String>) -> Self {
        self.gloss.english_secondary.push(word.into());
        self
    }

    /// Builder method to add a Māori gloss.
    #[must_use]
    pub fn with_maori(mut self, word: impl Into<String>) -> Self {
        self.gloss.maori.push(word.into());
        self
    }

    /// Builder method to set the video file.
    #[must_use]
    pub fn with_video(mut self, file: impl Into<String>) -> Self {
        self.video = Some(file.into());
        self
    }

    /// Builder method to set the image file.
    #[must_use]
    pub fn with_image(mut self, file: impl Into<String>) -> Self {
        self.image = Some(file.into());
        self
    }

    /// The first primary English gloss, used as the sign's display word.
    #[must_use]
    pub fn headword(&self) -> Option<&str> {
        self.gloss.english.first().map(String::as_str)
    }

    /// Every English gloss a lookup should index, lowercased and trimmed.
    pub fn index_words(&self) -> impl Iterator<Item = String> + '_ {
        self.gloss
            .english
            .iter()
            .chain(&self.gloss.english_secondary)
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
    }
}

/// Reads a list that may contain nulls or blank strings, keeping the rest.
fn non_blank_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|w| !w.trim().is_empty())
        .collect())
}
