use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Per-class probabilities reported by one model, in source order.
///
/// Stored as a list of pairs rather than a map: the order in which the
/// inference service listed the classes is the tie-break order when the
/// distribution is later sorted, so it must survive deserialization.
/// Values are kept exactly as received (no clamping, no renormalization).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityDistribution(Vec<(String, f64)>);

impl ProbabilityDistribution {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, p)| (label.as_str(), *p))
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.iter().find(|(l, _)| *l == label).map(|(_, p)| p)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ProbabilityDistribution {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, p)| (label.into(), p))
                .collect(),
        )
    }
}

impl Serialize for ProbabilityDistribution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, p) in &self.0 {
            map.serialize_entry(label, p)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProbabilityDistribution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = ProbabilityDistribution;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of class label to probability")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, p)) = map.next_entry::<String, f64>()? {
                    entries.push((label, p));
                }
                Ok(ProbabilityDistribution(entries))
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}
