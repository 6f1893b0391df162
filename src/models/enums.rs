//! Closed enumerations used by the normalized model
//!
//! Each enum serializes to the literal returned by its `as_str`, and parses
//! back from that literal through `FromStr`. Mapping from the loosely typed
//! tokens found in model documents lives in `import::mappers`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a literal does not name an enum member
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {enum_name}")]
pub struct ParseEnumError {
    pub enum_name: &'static str,
    pub value: String,
}

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $literal)] $variant ),+
        }

        impl $name {
            /// All members, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $literal),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        enum_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

literal_enum! {
    /// Column data type
    DataType {
        Int64 => "Int64",
        Double => "Double",
        Boolean => "Boolean",
        String => "String",
        DateTime => "DateTime",
        Decimal => "Decimal",
        Binary => "Binary",
        Table => "Table",
        Variant => "Variant",
        Unknown => "Unknown",
    }
}

literal_enum! {
    /// How a partition loads its rows
    PartitionSourceType {
        /// Power Query (M) expression
        M => "m",
        /// Calculated table expression
        Calculated => "calculated",
        /// Native query against a data source
        Query => "query",
        None => "none",
    }
}

literal_enum! {
    /// Relationship cardinality, read as from-side to to-side
    Cardinality {
        OneToOne => "OneToOne",
        OneToMany => "OneToMany",
        ManyToOne => "ManyToOne",
    }
}

literal_enum! {
    /// Direction(s) in which a relationship propagates filters
    CrossFilteringBehavior {
        OneDirection => "OneDirection",
        BothDirections => "BothDirections",
        None => "None",
    }
}

literal_enum! {
    /// Partition data view
    DataViewMode {
        Full => "Full",
        Sample => "Sample",
    }
}

impl Default for DataType {
    fn default() -> Self {
        DataType::Unknown
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Cardinality::OneToMany
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_round_trip_through_from_str() {
        for dt in DataType::ALL {
            assert_eq!(dt.as_str().parse::<DataType>().unwrap(), *dt);
        }
        for st in PartitionSourceType::ALL {
            assert_eq!(st.as_str().parse::<PartitionSourceType>().unwrap(), *st);
        }
        for c in Cardinality::ALL {
            assert_eq!(c.as_str().parse::<Cardinality>().unwrap(), *c);
        }
    }

    #[test]
    fn test_serializes_as_literal() {
        assert_eq!(serde_json::to_string(&DataType::Int64).unwrap(), "\"Int64\"");
        assert_eq!(serde_json::to_string(&PartitionSourceType::M).unwrap(), "\"m\"");
        assert_eq!(
            serde_json::to_string(&CrossFilteringBehavior::BothDirections).unwrap(),
            "\"BothDirections\""
        );
        let parsed: DataViewMode = serde_json::from_str("\"Sample\"").unwrap();
        assert_eq!(parsed, DataViewMode::Sample);
    }

    #[test]
    fn test_from_str_rejects_unknown_literal() {
        let err = "int64".parse::<DataType>().unwrap_err();
        assert_eq!(err.enum_name, "DataType");
        assert_eq!(err.value, "int64");
    }
}
