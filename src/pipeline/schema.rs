//! Attribute schema: which roster columns are tracked and how each one merges

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator between merged values
pub const VALUE_SEPARATOR: &str = ", ";

/// How the values of one attribute combine for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Keep every value in arrival order, duplicates included
    List,
    /// Distinct values, sorted
    Set,
}

impl MergePolicy {
    /// Merge present values into a single display string
    pub fn merge<'a, I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            MergePolicy::List => values.into_iter().collect::<Vec<_>>().join(VALUE_SEPARATOR),
            MergePolicy::Set => values
                .into_iter()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>()
                .join(VALUE_SEPARATOR),
        }
    }
}

/// One tracked roster column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Column name in the roster
    pub name: String,
    /// Short label used in display text and exports
    pub label: String,
    #[serde(default = "default_merge", rename = "merge")]
    pub policy: MergePolicy,
}

fn default_merge() -> MergePolicy {
    MergePolicy::List
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, policy: MergePolicy) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            policy,
        }
    }
}

/// Ordered attribute specs plus the heading used for the region line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSchema {
    pub region_label: String,
    pub attributes: Vec<AttributeSpec>,
}

impl AttributeSchema {
    pub fn new(region_label: impl Into<String>, attributes: Vec<AttributeSpec>) -> Self {
        Self {
            region_label: region_label.into(),
            attributes,
        }
    }

    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name.clone()).collect()
    }
}

impl Default for AttributeSchema {
    /// Account Executive and Account Manager keep every assignment in order;
    /// Project Manager lists distinct people only.
    fn default() -> Self {
        Self::new("State", default_attributes())
    }
}

pub fn default_attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::new("Account Executive", "AE", MergePolicy::List),
        AttributeSpec::new("Account Manager", "AM", MergePolicy::List),
        AttributeSpec::new("Project Manager", "PM", MergePolicy::Set),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_merge_keeps_order_and_duplicates() {
        let merged = MergePolicy::List.merge(["Ryan Yohe", "Ryan Yohe", "Alex"]);
        assert_eq!(merged, "Ryan Yohe, Ryan Yohe, Alex");
    }

    #[test]
    fn test_set_merge_sorts_and_deduplicates() {
        let merged = MergePolicy::Set.merge(["B", "A", "A", "A", "B"]);
        assert_eq!(merged, "A, B");
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert_eq!(MergePolicy::List.merge(Vec::<&str>::new()), "");
        assert_eq!(MergePolicy::Set.merge(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = toml::from_str::<AttributeSpec>("name = \"X\"\nlabel = \"X\"\nmerge = \"bag\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_attribute_spec_deserializes_with_default_policy() {
        let spec: AttributeSpec = toml::from_str("name = \"Sales Engineer\"\nlabel = \"SE\"").unwrap();
        assert_eq!(spec.policy, MergePolicy::List);

        let spec: AttributeSpec =
            toml::from_str("name = \"Project Manager\"\nlabel = \"PM\"\nmerge = \"set\"").unwrap();
        assert_eq!(spec.policy, MergePolicy::Set);
    }

    #[test]
    fn test_default_schema() {
        let schema = AttributeSchema::default();
        assert_eq!(schema.region_label, "State");
        assert_eq!(
            schema.attribute_names(),
            vec!["Account Executive", "Account Manager", "Project Manager"]
        );
        assert_eq!(schema.attributes[2].policy, MergePolicy::Set);
    }
}
