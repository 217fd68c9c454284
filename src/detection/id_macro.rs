/// Generates an identifier enum with fixed variants plus a `Custom(String)` fallback.
///
/// Each variant declares its serialized id and its display name. Unknown ids
/// deserialize into `Custom`, so caller-supplied catalogs can name frameworks
/// that have no built-in variant.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $id:literal : $display_name:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.id())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(match s.as_str() {
                    $(
                        $id => Self::$variant,
                    )*
                    _ => Self::Custom(s),
                })
            }
        }

        impl $enum_name {
            /// Stable machine-readable id
            pub fn id(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $id,
                    )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            /// Human-readable name
            pub fn name(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $display_name,
                    )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            /// Resolves a display name, falling back to `Custom`
            pub fn from_name(name: &str) -> Self {
                match name {
                    $(
                        $display_name => Self::$variant,
                    )*
                    _ => Self::Custom(name.to_string()),
                }
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
