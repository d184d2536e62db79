//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog identifiers
//! are opaque strings assigned by the catalog service, so the wrappers hold
//! a `String` rather than an integer.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use coffee_delivery_core::define_id;
/// define_id!(CoffeeId);
/// define_id!(OrderId);
///
/// let coffee_id = CoffeeId::new("expresso");
/// let order_id = OrderId::new("expresso");
///
/// // These are different types, so this won't compile:
/// // let _: CoffeeId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(CoffeeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_id_roundtrip() {
        let id = CoffeeId::new("expresso-tradicional");
        assert_eq!(id.as_str(), "expresso-tradicional");
        assert_eq!(id.to_string(), "expresso-tradicional");
        assert_eq!(String::from(id), "expresso-tradicional");
    }

    #[test]
    fn test_coffee_id_serde_transparent() {
        let id = CoffeeId::new("0");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"0\"");

        let back: CoffeeId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_coffee_id_equality() {
        assert_eq!(CoffeeId::from("1"), CoffeeId::new("1"));
        assert_ne!(CoffeeId::from("1"), CoffeeId::new("2"));
    }
}
