use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrincipalError;

const GROUP_LEN: usize = 5;

/// Textual identity of the signed-in user, e.g. `2vxsx-fae`.
///
/// Only the textual shape is checked: lowercase base32 groups of five
/// separated by dashes, with a final group of one to five characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(PrincipalError::Empty);
        }

        let groups: Vec<&str> = text.split('-').collect();
        let last = groups.len() - 1;
        for (i, group) in groups.iter().enumerate() {
            if let Some(c) = group
                .chars()
                .find(|c| !matches!(c, 'a'..='z' | '2'..='7'))
            {
                return Err(PrincipalError::InvalidChar(c));
            }
            let ok = if i == last {
                (1..=GROUP_LEN).contains(&group.len())
            } else {
                group.len() == GROUP_LEN
            };
            if !ok {
                return Err(PrincipalError::BadGroup(i));
            }
        }

        Ok(Self(text.to_string()))
    }
}

impl TryFrom<String> for Principal {
    type Error = PrincipalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Principal> for String {
    fn from(p: Principal) -> Self {
        p.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_principals() {
        for text in [
            "2vxsx-fae",
            "aaaaa-aa",
            "rrkah-fqaaa-aaaaa-aaaaq-cai",
        ] {
            let p: Principal = text.parse().unwrap();
            assert_eq!(p.as_str(), text);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let p: Principal = "  2vxsx-fae\n".parse().unwrap();
        assert_eq!(p.to_string(), "2vxsx-fae");
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!("".parse::<Principal>(), Err(PrincipalError::Empty));
        assert_eq!(
            "2VXSX-fae".parse::<Principal>(),
            Err(PrincipalError::InvalidChar('V'))
        );
        assert_eq!(
            "abc-fae".parse::<Principal>(),
            Err(PrincipalError::BadGroup(0))
        );
        assert_eq!(
            "aaaaa-".parse::<Principal>(),
            Err(PrincipalError::BadGroup(1))
        );
        assert_eq!(
            "aaaaa-aaaaaa".parse::<Principal>(),
            Err(PrincipalError::BadGroup(1))
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let p: Principal = "2vxsx-fae".parse().unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"2vxsx-fae\"");
        let back: Principal = serde_json::from_str("\"2vxsx-fae\"").unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Principal>("\"NOPE\"").is_err());
    }
}
