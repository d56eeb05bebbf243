use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error;

/// Session-level policy for which groups play the feedback treatment.
///
/// - `Half`: groups alternate True/False in subsession order, starting True
/// - `All`: every group rates its partner
/// - `None`: nobody rates; also the fallback for unrecognized policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Treatment {
    Half,
    All,
    #[default]
    None,
}

impl Treatment {
    /// Feedback flags for `n` groups, in the order the groups are listed.
    pub fn assign(&self, n: usize) -> Vec<bool> {
        match self {
            Self::Half => [true, false].into_iter().cycle().take(n).collect(),
            Self::All => vec![true; n],
            Self::None => vec![false; n],
        }
    }
}

impl From<&str> for Treatment {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "half" => Self::Half,
            "all" => Self::All,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for Treatment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Half => write!(f, "half"),
            Self::All => write!(f, "all"),
            Self::None => write!(f, "none"),
        }
    }
}

impl Serialize for Treatment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Any string is accepted (unknown ones mean no feedback), null means no
/// feedback, and anything else is a configuration error.
impl<'de> Deserialize<'de> for Treatment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(Self::from(s.as_str())),
            serde_json::Value::Null => Ok(Self::None),
            other => Err(D::Error::custom(format!(
                "feedback_treatment must be a string, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_alternates_starting_true() {
        assert_eq!(Treatment::Half.assign(4), vec![true, false, true, false]);
        assert_eq!(Treatment::Half.assign(3), vec![true, false, true]);
        assert_eq!(Treatment::Half.assign(0), Vec::<bool>::new());
    }
    #[test]
    fn all_and_none_are_uniform() {
        assert!(Treatment::All.assign(7).into_iter().all(|f| f));
        assert!(Treatment::None.assign(7).into_iter().all(|f| !f));
    }
    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Treatment::from("HALF"), Treatment::Half);
        assert_eq!(Treatment::from("All"), Treatment::All);
        assert_eq!(Treatment::from("None"), Treatment::None);
        assert_eq!(Treatment::from("quarter"), Treatment::None);
        assert_eq!(Treatment::from(""), Treatment::None);
    }
    #[test]
    fn padded_policy_is_unrecognized() {
        assert_eq!(Treatment::from(" half "), Treatment::None);
        assert_eq!(Treatment::from("all\n"), Treatment::None);
    }
    #[test]
    fn non_string_policy_is_rejected() {
        assert!(serde_json::from_str::<Treatment>("\"half\"").is_ok());
        assert!(serde_json::from_str::<Treatment>("null").is_ok());
        assert!(serde_json::from_str::<Treatment>("3").is_err());
        assert!(serde_json::from_str::<Treatment>("[\"half\"]").is_err());
    }
}
