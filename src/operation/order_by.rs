use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_cypher(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One sort key of the `orderBy` argument.
///
/// Deserializes from either `{ "field": "name", "direction": "desc" }` or the
/// generated GraphQL enum value form `"name_desc"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderByRepr")]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid orderBy value '{0}' (expected <field>_asc or <field>_desc)")]
pub struct InvalidOrderBy(String);

impl FromStr for OrderBy {
    type Err = InvalidOrderBy;

    /// Splits on the last underscore so fields may contain underscores themselves
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, suffix) = s.rsplit_once('_').ok_or_else(|| InvalidOrderBy(s.to_string()))?;
        if field.is_empty() {
            return Err(InvalidOrderBy(s.to_string()));
        }
        let direction = match suffix {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(InvalidOrderBy(s.to_string())),
        };
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}_{}", self.field, suffix)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrderByRepr {
    Enum(String),
    Explicit {
        field: String,
        #[serde(default)]
        direction: SortDirection,
    },
}

impl TryFrom<OrderByRepr> for OrderBy {
    type Error = InvalidOrderBy;

    fn try_from(repr: OrderByRepr) -> Result<Self, Self::Error> {
        match repr {
            OrderByRepr::Enum(value) => value.parse(),
            OrderByRepr::Explicit { field, direction } => Ok(Self { field, direction }),
        }
    }
}
