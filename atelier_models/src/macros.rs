macro_rules! nutype_string {
    ($ident:ident($($arg:ident $arg_body:tt),* $(,)?)) => {
        #[::nutype::nutype(
            $($arg $arg_body,)*
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                Deref,
                AsRef,
                TryFrom,
                Display,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

/// Declares a fixed set of selectable options. Every variant carries the slug
/// submitted by the form and the label shown to (and emailed to) humans.
macro_rules! select_options {
    (
        $(#[$meta:meta])*
        $ident:ident {
            $($variant:ident => ($slug:literal, $label:literal)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $ident {
            $(
                #[serde(rename = $slug)]
                $variant,
            )*
        }

        impl $ident {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
            pub const SLUGS: &'static [&'static str] = &[$($slug),*];

            pub fn slug(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)*
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl ::std::str::FromStr for $ident {
            type Err = $crate::inquiry::UnknownOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok(Self::$variant),)*
                    _ => Err($crate::inquiry::UnknownOptionError(s.into())),
                }
            }
        }

        impl ::std::fmt::Display for $ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use nutype_string;
pub(crate) use select_options;
