use std::collections::BTreeMap;

use serde::Serialize;

/// Named output quantities from a single prediction.
///
/// Keys carry their unit as a suffix (e.g. `"cooling_load_W"`) unless the key
/// is a name fixed by the dispatch optimizer (e.g. `"Qch"`, in cooling tons).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Prediction(BTreeMap<&'static str, f64>);

impl Prediction {
    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Returns the number of output quantities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the prediction holds no quantities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.0.iter().map(|(key, value)| (*key, *value))
    }

    /// Returns a prediction holding only the entries named in `keys`.
    #[must_use]
    pub fn select(&self, keys: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| keys.contains(*key))
                .map(|(key, value)| (*key, *value))
                .collect(),
        )
    }
}

impl FromIterator<(&'static str, f64)> for Prediction {
    fn from_iter<I: IntoIterator<Item = (&'static str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
