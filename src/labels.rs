//! The closed label sets keyed by the panel, and a table type holding one
//! value per label in declared order.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// A member of a fixed, ordered label set.
pub trait Label: Copy + Ord + fmt::Debug + Serialize + DeserializeOwned + 'static {
    /// Every label, in declared order.
    const ALL: &'static [Self];

    /// Name used in CSS custom properties and JSON keys.
    fn as_str(self) -> &'static str;

    fn index(self) -> usize;
}

/// Typographic roles with a fluid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeLabel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
    Small,
}

impl Label for SizeLabel {
    const ALL: &'static [Self] = &[
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::Body,
        Self::Small,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Body => "body",
            Self::Small => "small",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl SizeLabel {
    /// Heading levels in order, for the example rules and the preview.
    pub const HEADINGS: [SizeLabel; 6] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
    ];
}

/// Palette roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorLabel {
    Heading,
    Body,
    Primary,
    Secondary,
    Tertiary,
    Highlight,
    GradientStart,
    GradientEnd,
    Background,
    Section,
    LineColor,
}

impl Label for ColorLabel {
    const ALL: &'static [Self] = &[
        Self::Heading,
        Self::Body,
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Highlight,
        Self::GradientStart,
        Self::GradientEnd,
        Self::Background,
        Self::Section,
        Self::LineColor,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Body => "body",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Highlight => "highlight",
            Self::GradientStart => "gradientStart",
            Self::GradientEnd => "gradientEnd",
            Self::Background => "background",
            Self::Section => "section",
            Self::LineColor => "lineColor",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeLabel {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| StudioError::UnknownSizeLabel(s.to_string()))
    }
}

impl FromStr for ColorLabel {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| StudioError::UnknownColorLabel(s.to_string()))
    }
}

/// Exactly one value per label of `L`, stored in declared order.
///
/// Serializes as a JSON/TOML map keyed by label name. Deserializing
/// requires every label to be present; unknown keys are rejected by the
/// label type itself.
#[derive(Clone, PartialEq)]
pub struct LabelTable<L: Label, V> {
    values: Vec<V>,
    _label: PhantomData<L>,
}

impl<L: Label, V> LabelTable<L, V> {
    /// Build a table by asking `f` for each label's value.
    pub fn from_fn(mut f: impl FnMut(L) -> V) -> Self {
        Self {
            values: L::ALL.iter().map(|&l| f(l)).collect(),
            _label: PhantomData,
        }
    }

    pub fn get(&self, label: L) -> &V {
        &self.values[label.index()]
    }

    pub fn set(&mut self, label: L, value: V) {
        self.values[label.index()] = value;
    }

    /// Label/value pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (L, &V)> + '_ {
        L::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<L: Label, V: fmt::Debug> fmt::Debug for LabelTable<L, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(l, v)| (l.as_str(), v)))
            .finish()
    }
}

impl<L: Label, V> std::ops::Index<L> for LabelTable<L, V> {
    type Output = V;

    fn index(&self, label: L) -> &V {
        self.get(label)
    }
}

impl<L: Label, V: Serialize> Serialize for LabelTable<L, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (label, value) in self.iter() {
            map.serialize_entry(label.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de, L: Label, V: Deserialize<'de>> Deserialize<'de> for LabelTable<L, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries: BTreeMap<L, V> = BTreeMap::deserialize(deserializer)?;
        let mut values = Vec::with_capacity(L::ALL.len());
        for &label in L::ALL {
            match entries.remove(&label) {
                Some(v) => values.push(v),
                None => {
                    return Err(de::Error::custom(StudioError::MissingLabel(label.as_str())));
                }
            }
        }
        Ok(Self {
            values,
            _label: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_matches_index() {
        for (i, l) in SizeLabel::ALL.iter().enumerate() {
            assert_eq!(l.index(), i);
        }
        for (i, l) in ColorLabel::ALL.iter().enumerate() {
            assert_eq!(l.index(), i);
        }
        assert_eq!(SizeLabel::ALL.len(), 8);
        assert_eq!(ColorLabel::ALL.len(), 11);
    }

    #[test]
    fn serde_names_match_css_names() {
        for &l in ColorLabel::ALL {
            let json = serde_json::to_string(&l).unwrap();
            assert_eq!(json, format!("\"{}\"", l.as_str()));
        }
        for &l in SizeLabel::ALL {
            let json = serde_json::to_string(&l).unwrap();
            assert_eq!(json, format!("\"{}\"", l.as_str()));
        }
    }

    #[test]
    fn parse_labels() {
        assert_eq!("gradientStart".parse::<ColorLabel>().unwrap(), ColorLabel::GradientStart);
        assert_eq!("small".parse::<SizeLabel>().unwrap(), SizeLabel::Small);
        assert!(matches!(
            "h7".parse::<SizeLabel>(),
            Err(StudioError::UnknownSizeLabel(name)) if name == "h7"
        ));
        assert!("gradient-start".parse::<ColorLabel>().is_err());
    }

    #[test]
    fn table_serializes_in_declared_order() {
        let table: LabelTable<SizeLabel, usize> = LabelTable::from_fn(|l: SizeLabel| l.index());
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"h1":0,"h2":1,"h3":2,"h4":3,"h5":4,"h6":5,"body":6,"small":7}"#
        );
    }

    #[test]
    fn table_requires_every_label() {
        let err = serde_json::from_str::<LabelTable<SizeLabel, f64>>(r#"{"h1":1.0}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing value for label `h2`"), "{err}");
    }

    #[test]
    fn table_rejects_unknown_label() {
        let json = r#"{"h1":1,"h2":1,"h3":1,"h4":1,"h5":1,"h6":1,"body":1,"small":1,"h7":1}"#;
        assert!(serde_json::from_str::<LabelTable<SizeLabel, f64>>(json).is_err());
    }
}
