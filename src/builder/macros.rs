//! Macros for declaring keypad vocabularies.

/// Generate a token vocabulary for a simple keypad enum.
///
/// Each variant is bound to the string token the keypad sends for it. The
/// macro derives the usual value traits and implements `token()`, `ALL`,
/// `Display` and a `from_token` lookup.
///
/// # Example
///
/// ```
/// use calcpad::token_enum;
///
/// token_enum! {
///     pub enum Toggle {
///         On => "on",
///         Off => "off",
///     }
/// }
///
/// assert_eq!(Toggle::On.token(), "on");
/// assert_eq!(Toggle::from_token("off"), Some(Toggle::Off));
/// assert_eq!(Toggle::from_token("dim"), None);
/// assert_eq!(Toggle::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The keypad token for this variant.
            pub fn token(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),*
                }
            }

            /// Look up a variant by its keypad token.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}
