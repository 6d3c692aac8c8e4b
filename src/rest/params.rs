//! Query parameters for DeansList requests.

use std::fmt::Display;

use chrono::NaiveDate;

/// Ordered query parameters for a request.
///
/// Parameter names are passed to the API verbatim, so they must match the
/// vendor's spelling (`sdt`, `UpdatedSince`, `IncludeDeleted`, ...).
/// Inserting a key that is already present replaces its value in place.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use deanslist::QueryParams;
///
/// let params = QueryParams::new()
///     .date("sdt", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .date("edt", NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
///     .flag("IncludeDeleted", true);
///
/// assert_eq!(params.get("sdt"), Some("2024-01-01"));
/// assert_eq!(params.get("IncludeDeleted"), Some("Y"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter to the display form of `value`.
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key.into(), value.to_string());
        self
    }

    /// Sets a date parameter, formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date(self, key: impl Into<String>, date: NaiveDate) -> Self {
        self.insert(key, date.format("%Y-%m-%d"))
    }

    /// Sets a yes/no parameter, encoded as `Y` or `N`.
    #[must_use]
    pub fn flag(self, key: impl Into<String>, value: bool) -> Self {
        self.insert(key, if value { "Y" } else { "N" })
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn set(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (k, v)| params.insert(k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let params = QueryParams::new().insert("sdt", "2024-01-01").insert("edt", "2024-01-31");
        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, vec!["sdt", "edt"]);
    }

    #[test]
    fn test_insert_replaces_existing_key_in_place() {
        let params = QueryParams::new()
            .insert("rid", 1)
            .insert("sid", 2)
            .insert("rid", 3);

        assert_eq!(params.len(), 2);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("rid", "3"), ("sid", "2")]);
    }

    #[test]
    fn test_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();
        let params = QueryParams::new().date("UpdatedSince", date);
        assert_eq!(params.get("UpdatedSince"), Some("2023-09-05"));
    }

    #[test]
    fn test_flag_encoding() {
        let params = QueryParams::new().flag("cf", true).flag("show_inactive", false);
        assert_eq!(params.get("cf"), Some("Y"));
        assert_eq!(params.get("show_inactive"), Some("N"));
    }

    #[test]
    fn test_from_iterator() {
        let params: QueryParams = [("sdt", "2024-01-01"), ("edt", "2024-01-31")]
            .into_iter()
            .collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("edt"), Some("2024-01-31"));
        assert!(params.get("sid").is_none());
    }

    #[test]
    fn test_empty_params() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.keys().count(), 0);
    }
}
