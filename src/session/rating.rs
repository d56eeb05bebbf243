use serde::Deserialize;
use serde::Serialize;

/// Five-point rating vocabularies offered on the Feedback page.
/// Each variant serializes as the label shown to participants.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            /// Every choice, in display order.
            pub const ALL: [Self; 5] = [$(Self::$variant),*];
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = anyhow::Error;
            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::ALL
                    .into_iter()
                    .find(|choice| choice.label() == s.trim())
                    .ok_or_else(|| anyhow::anyhow!("{:?} is not a {} choice", s, stringify!($name)))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

vocabulary!(
    /// How fair the partner's decision felt.
    Fairness {
        VeryUnfair => "Sehr unfair",
        Unfair => "Unfair",
        Neutral => "Weder fair noch unfair",
        Fair => "Fair",
        VeryFair => "Sehr fair",
    }
);

vocabulary!(
    /// Whether the amount the partner sent was appropriate.
    Appropriateness {
        MuchTooSmall => "Viel zu klein",
        TooSmall => "Zu klein",
        Appropriate => "Genau angemessen",
        TooLarge => "Zu groß",
        MuchTooLarge => "Viel zu groß",
    }
);
