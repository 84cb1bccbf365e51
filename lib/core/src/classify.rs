//! Keyword classification of stored values into canonical groups
//!
//! Rules are evaluated in a fixed order and the first hit wins, so a value
//! carrying keywords of two groups always lands in the earlier one
//! ("Forged Stainless Steel" is stainless, never carbon).

use crate::attribute::Category;
use crate::normalize::size_magnitude;
use serde::Serialize;
use std::collections::BTreeMap;

type Rule = (&'static str, fn(&str) -> bool);

static MATERIAL_RULES: &[Rule] = &[
    ("stainless_steel", |v: &str| {
        v.contains("stainless") || v == "ss" || v == "s.s." || v.contains("316") || v.contains("304")
    }),
    ("carbon_steel", |v: &str| {
        (v.contains("carbon") && v.contains("steel"))
            || (v.contains("forged") && v.contains("steel"))
            || v == "cs"
            || v == "c.s."
    }),
    ("brass", |v: &str| v.contains("brass")),
    ("bronze", |v: &str| v.contains("bronze")),
    ("cast_iron", |v: &str| {
        (v.contains("cast iron") || v.contains("ductile iron")) && !v.contains("steel")
    }),
    ("plastic", |v: &str| v.contains("pvc")),
    ("aluminum", |v: &str| v.contains("aluminum") || v.contains("aluminium")),
];

static END_CONNECTION_RULES: &[Rule] = &[
    ("socket_weld", |v: &str| v.contains("socket") || v.contains("sw")),
    ("threaded", |v: &str| {
        v.contains("thread") || v.contains("npt") || v.contains("screwed") || v == "thr"
    }),
    ("flanged", |v: &str| v.contains("flange") || v.contains("flg")),
    ("butt_weld", |v: &str| v.contains("butt") || v.contains("bwe")),
    ("clamp", |v: &str| v.contains("clamp")),
    ("solder", |v: &str| v.contains("solder")),
    ("press", |v: &str| v.contains("press")),
    ("welded", |v: &str| v.contains("welded")),
];

fn rules(category: Category) -> &'static [Rule] {
    match category {
        Category::Material => MATERIAL_RULES,
        Category::EndConnection => END_CONNECTION_RULES,
        _ => &[],
    }
}

/// First matching canonical group for a raw value, in precedence order
pub fn classify(category: Category, raw: &str) -> Option<&'static str> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }
    rules(category)
        .iter()
        .find(|(_, matches)| matches(value.as_str()))
        .map(|(group, _)| *group)
}

/// Distinct stored values grouped into compatibility-mapping suggestions
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupSuggestions {
    pub groups: BTreeMap<&'static str, Vec<String>>,
    pub unclassified: Vec<String>,
}

/// Group distinct values by classifier result.
///
/// Values are de-duplicated and sorted within each group. Sizes have no
/// vocabulary; they are returned as one `size` group in numeric order with
/// unparseable sizes last.
pub fn suggest_groups<I, S>(category: Category, values: I) -> GroupSuggestions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut suggestions = GroupSuggestions::default();

    if category == Category::Size {
        let mut sizes: Vec<String> = values.into_iter().map(|v| v.as_ref().trim().to_string()).collect();
        sizes.sort();
        sizes.dedup();
        sizes.sort_by(|a, b| {
            let ka = size_magnitude(a).unwrap_or(f64::MAX);
            let kb = size_magnitude(b).unwrap_or(f64::MAX);
            ka.total_cmp(&kb).then_with(|| a.cmp(b))
        });
        suggestions.groups.insert("size", sizes);
        return suggestions;
    }

    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        match classify(category, value) {
            Some(group) => suggestions.groups.entry(group).or_default().push(value.to_string()),
            None => suggestions.unclassified.push(value.to_string()),
        }
    }

    for members in suggestions.groups.values_mut() {
        members.sort();
        members.dedup();
    }
    suggestions.unclassified.sort();
    suggestions.unclassified.dedup();
    suggestions
}
