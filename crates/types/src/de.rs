//! Serde helpers for forgiving config deserialization.
//!
//! Widget configs come from an external settings UI; an unrecognized enum
//! string or malformed value must degrade to the default branch instead of
//! failing the whole config.

/// Generate a string-backed config enum with fallback parsing.
///
/// Each enum produced serializes as its wire string and deserializes any
/// unknown string to the declared default variant.
#[macro_export]
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
        default: $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Wire string used in configs and exported documents
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parse a wire string; unknown values fall back to the default.
            pub fn parse(s: &str) -> Self {
                match s {
                    $($wire => Self::$variant,)+
                    _ => Self::$default,
                }
            }

            /// All wire strings, in declaration order
            pub fn wire_values() -> &'static [&'static str] {
                &[$($wire),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::parse(&s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    config_enum! {
        /// Test enum
        Flavor {
            Plain => "plain",
            Spicy => "spicy",
        }
        default: Plain
    }

    #[test]
    fn test_unknown_string_falls_back() {
        assert_eq!(Flavor::parse("spicy"), Flavor::Spicy);
        assert_eq!(Flavor::parse("umami"), Flavor::Plain);
        let de: Flavor = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(de, Flavor::Plain);
    }

    #[test]
    fn test_round_trip() {
        let json = serde_json::to_string(&Flavor::Spicy).unwrap();
        assert_eq!(json, "\"spicy\"");
        let back: Flavor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Flavor::Spicy);
    }
}
