//! Declarative helpers for the customization schema.
//!
//! Two shapes repeat across the schema: closed string enums that must
//! still carry unknown values, and flat leaf groups that need a sparse
//! `Partial*` mirror plus a leaf-level merge. Nested groups are written
//! by hand in `types.rs` so the recursion stays explicit.

/// Closed set of string variants with an `Other(String)` carrier.
///
/// Known strings map to unit variants; anything else is kept verbatim in
/// `Other` so it survives merge and serializes back unchanged.
macro_rules! style_variant {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Unrecognised value, preserved as given.
            Other(String),
        }

        impl $name {
            /// Every recognised variant, in declaration order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Map a string onto a variant. Never fails.
            pub fn parse(s: &str) -> Self {
                match s {
                    $( $text => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }

            /// The wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $text, )+
                    $name::Other(s) => s,
                }
            }

            /// Whether this is one of the recognised variants.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::parse(&s))
            }
        }
    };
}

/// Flat group of leaves plus its sparse override mirror.
///
/// Generates `$name` (every field required), `$partial` (every field
/// optional, absent or `null` in JSON means "not overridden"),
/// `$name::merged` and a `From<&$name>` conversion into the partial form.
macro_rules! leaf_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $partial:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        #[doc = concat!("Sparse override of [`", stringify!($name), "`]; absent fields keep the base value.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $partial {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Leaf-level merge: a present override wins, an absent one keeps `self`.
            pub fn merged(&self, over: &$partial) -> Self {
                Self {
                    $( $field: over.$field.clone().unwrap_or_else(|| self.$field.clone()), )+
                }
            }
        }

        impl From<&$name> for $partial {
            fn from(full: &$name) -> Self {
                Self {
                    $( $field: Some(full.$field.clone()), )+
                }
            }
        }
    };
}
