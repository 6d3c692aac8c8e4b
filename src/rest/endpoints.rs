//! Endpoint registry for the DeansList API.
//!
//! Every resource the client can fetch is described by one [`EndpointSpec`]
//! in the static [`ENDPOINTS`] table. The table is the contract surface with
//! the vendor: path fragments and accepted parameter names are reproduced
//! exactly as the API defines them.
//!
//! # API Families
//!
//! DeansList serves three generations of endpoints, each with its own path
//! convention. [`ApiFamily::path`] fills in the right one:
//!
//! | Family | Template |
//! |---|---|
//! | [`ApiFamily::BetaExport`] | `api/beta/export/get-{endpoint}.php` |
//! | [`ApiFamily::BetaBank`] | `api/beta/bank/get-{endpoint}.php` |
//! | [`ApiFamily::V1`] | `api/v1/{endpoint}` |
//!
//! # Cardinality
//!
//! A [`Cardinality::Resource`] endpoint returns one record addressed by an
//! identifier appended to the path. A [`Cardinality::Collection`] endpoint
//! takes no identifier and is filtered by query parameters. Where the API
//! offers both over the same path they are registered as two names, e.g.
//! `rosters` and `roster`.
//!
//! # Example
//!
//! ```rust
//! use deanslist::rest::{lookup, Cardinality};
//!
//! let spec = lookup("behavior").unwrap();
//! assert_eq!(spec.path(), "api/beta/export/get-behavior-data.php");
//! assert_eq!(spec.cardinality, Cardinality::Collection);
//!
//! let spec = lookup("roster").unwrap();
//! assert_eq!(spec.resolve_path(&["12"]).unwrap(), "api/v1/rosters/12");
//! ```

use std::fmt;

use crate::error::DeansListError;

/// The API generation an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// Legacy export endpoints (`api/beta/export`).
    BetaExport,
    /// Legacy points bank endpoints (`api/beta/bank`).
    BetaBank,
    /// Current versioned REST endpoints (`api/v1`).
    V1,
}

impl ApiFamily {
    /// Returns the base path prefix shared by every endpoint in the family.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::BetaExport => "api/beta/export",
            Self::BetaBank => "api/beta/bank",
            Self::V1 => "api/v1",
        }
    }

    /// Fills the family's path template with an endpoint fragment.
    #[must_use]
    pub fn path(&self, endpoint: &str) -> String {
        match self {
            Self::BetaExport | Self::BetaBank => format!("{}/get-{endpoint}.php", self.prefix()),
            Self::V1 => format!("{}/{endpoint}", self.prefix()),
        }
    }
}

impl fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Whether an endpoint returns one record or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one record, addressed by an identifier.
    Resource,
    /// Zero or more records, filtered by query parameters.
    Collection,
}

impl Cardinality {
    /// Returns the number of identifiers this cardinality requires.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        match self {
            Self::Resource => 1,
            Self::Collection => 0,
        }
    }
}

/// Description of one DeansList endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// The resource name callers use (e.g. `behavior`).
    pub name: &'static str,
    /// The API family that determines the path template.
    pub family: ApiFamily,
    /// The endpoint fragment substituted into the family template.
    pub endpoint: &'static str,
    /// Single record or collection.
    pub cardinality: Cardinality,
    /// Query parameter names the endpoint accepts.
    pub allowed_params: &'static [&'static str],
}

impl EndpointSpec {
    /// Creates a new `EndpointSpec`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        family: ApiFamily,
        endpoint: &'static str,
        cardinality: Cardinality,
        allowed_params: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            family,
            endpoint,
            cardinality,
            allowed_params,
        }
    }

    /// Returns the path without any identifier.
    #[must_use]
    pub fn path(&self) -> String {
        self.family.path(self.endpoint)
    }

    /// Returns the path for a request, appending the identifier if required.
    ///
    /// Blank identifiers do not count as given. Each identifier must form a
    /// single path segment of unreserved characters.
    ///
    /// # Errors
    ///
    /// Returns [`DeansListError::InvalidArguments`] if the number of non-blank
    /// `ids` does not match the endpoint's cardinality, and
    /// [`DeansListError::InvalidIdentifier`] if an identifier would change
    /// the shape of the URL.
    pub fn resolve_path(&self, ids: &[&str]) -> Result<String, DeansListError> {
        let expected = self.cardinality.id_count();
        let given = ids.iter().filter(|id| !id.trim().is_empty()).count();
        if ids.len() != expected || given != expected {
            return Err(DeansListError::InvalidArguments {
                endpoint: self.name,
                expected,
                given,
            });
        }

        let mut path = self.path();
        for id in ids {
            if !is_path_segment(id) {
                return Err(DeansListError::InvalidIdentifier {
                    endpoint: self.name,
                    id: (*id).to_string(),
                });
            }
            path.push('/');
            path.push_str(id);
        }
        Ok(path)
    }

    /// Returns `true` if the endpoint accepts the given query parameter.
    #[must_use]
    pub fn allows(&self, key: &str) -> bool {
        self.allowed_params.contains(&key)
    }

    /// Checks that every key is an accepted query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`DeansListError::InvalidParameter`] naming the first key
    /// that is not accepted.
    pub fn validate_params<'a, I>(&self, keys: I) -> Result<(), DeansListError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match keys.into_iter().find(|key| !self.allows(key)) {
            Some(key) => Err(DeansListError::InvalidParameter {
                endpoint: self.name,
                key: key.to_string(),
                valid: self.allowed_params,
            }),
            None => Ok(()),
        }
    }
}

const DATE_RANGE: &[&str] = &["sdt", "edt"];
const EXPORT_FILTERS: &[&str] = &[
    "sdt",
    "edt",
    "UpdatedSince",
    "UpdatedBefore",
    "IncludeDeleted",
];
const DISCIPLINE_FILTERS: &[&str] = &["cf", "sdt", "edt", "UpdatedSince", "IncludeDeleted"];
const NONE: &[&str] = &[];

/// Every endpoint the client knows about.
pub const ENDPOINTS: &[EndpointSpec] = &[
    // api/beta/export
    EndpointSpec::new(
        "behavior",
        ApiFamily::BetaExport,
        "behavior-data",
        Cardinality::Collection,
        EXPORT_FILTERS,
    ),
    EndpointSpec::new(
        "homework",
        ApiFamily::BetaExport,
        "homework-data",
        Cardinality::Collection,
        EXPORT_FILTERS,
    ),
    EndpointSpec::new(
        "communications",
        ApiFamily::BetaExport,
        "comm-data",
        Cardinality::Collection,
        EXPORT_FILTERS,
    ),
    EndpointSpec::new(
        "users",
        ApiFamily::BetaExport,
        "users",
        Cardinality::Collection,
        &["show_inactive"],
    ),
    EndpointSpec::new(
        "students",
        ApiFamily::BetaExport,
        "students",
        Cardinality::Collection,
        &["StudentID", "IncludeParents", "IncludeUnenrolled"],
    ),
    EndpointSpec::new(
        "roster_assignments",
        ApiFamily::BetaExport,
        "roster-assignments",
        Cardinality::Collection,
        &["rt"],
    ),
    // api/beta/bank
    EndpointSpec::new(
        "points",
        ApiFamily::BetaBank,
        "bank-book",
        Cardinality::Collection,
        &["rid", "sid", "stus"],
    ),
    // api/v1
    EndpointSpec::new(
        "referrals",
        ApiFamily::V1,
        "referrals",
        Cardinality::Collection,
        &["sdt", "edt", "sid"],
    ),
    EndpointSpec::new(
        "suspensions",
        ApiFamily::V1,
        "suspensions",
        Cardinality::Collection,
        DISCIPLINE_FILTERS,
    ),
    EndpointSpec::new(
        "incidents",
        ApiFamily::V1,
        "incidents",
        Cardinality::Collection,
        DISCIPLINE_FILTERS,
    ),
    EndpointSpec::new(
        "followups",
        ApiFamily::V1,
        "followups",
        Cardinality::Collection,
        DATE_RANGE,
    ),
    EndpointSpec::new(
        "lists",
        ApiFamily::V1,
        "lists",
        Cardinality::Collection,
        NONE,
    ),
    EndpointSpec::new("list", ApiFamily::V1, "lists", Cardinality::Resource, NONE),
    EndpointSpec::new(
        "terms",
        ApiFamily::V1,
        "terms",
        Cardinality::Collection,
        NONE,
    ),
    EndpointSpec::new(
        "daily_attendance",
        ApiFamily::V1,
        "daily-attendance",
        Cardinality::Collection,
        DATE_RANGE,
    ),
    EndpointSpec::new(
        "class_attendance",
        ApiFamily::V1,
        "class-attendance",
        Cardinality::Collection,
        DATE_RANGE,
    ),
    EndpointSpec::new(
        "rosters",
        ApiFamily::V1,
        "rosters",
        Cardinality::Collection,
        NONE,
    ),
    EndpointSpec::new(
        "roster",
        ApiFamily::V1,
        "rosters",
        Cardinality::Resource,
        NONE,
    ),
    EndpointSpec::new(
        "coaching_observations",
        ApiFamily::V1,
        "coaching/observation",
        Cardinality::Collection,
        NONE,
    ),
    EndpointSpec::new(
        "coaching_observation",
        ApiFamily::V1,
        "coaching/observation",
        Cardinality::Resource,
        NONE,
    ),
    EndpointSpec::new(
        "all_coaching_evidence",
        ApiFamily::V1,
        "coaching/evidence",
        Cardinality::Collection,
        NONE,
    ),
    EndpointSpec::new(
        "coaching_evidence",
        ApiFamily::V1,
        "coaching/evidence",
        Cardinality::Resource,
        NONE,
    ),
];

/// Returns `true` if `id` can be sent unescaped as one path segment.
fn is_path_segment(id: &str) -> bool {
    id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// Looks up an endpoint by resource name.
///
/// # Errors
///
/// Returns [`DeansListError::UnknownEndpoint`] if no endpoint has that name.
pub fn lookup(name: &str) -> Result<&'static EndpointSpec, DeansListError> {
    ENDPOINTS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| DeansListError::UnknownEndpoint {
            name: name.to_string(),
        })
}

/// Returns every registered resource name in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENDPOINTS.iter().map(|spec| spec.name)
}

/// Returns the accessor method name (`get_<name>`) for every endpoint.
///
/// # Example
///
/// ```rust
/// let accessors = deanslist::rest::accessor_names();
/// assert!(accessors.contains(&"get_behavior".to_string()));
/// ```
#[must_use]
pub fn accessor_names() -> Vec<String> {
    names().map(|name| format!("get_{name}")).collect()
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EndpointSpec>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_name_is_unique() {
        let unique: HashSet<_> = names().collect();
        assert_eq!(unique.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_every_endpoint_resolves_to_a_prefixed_path() {
        for spec in ENDPOINTS {
            let found = lookup(spec.name).unwrap();
            assert_eq!(found, spec);
            assert!(!found.endpoint.is_empty());
            assert!(found.path().starts_with(found.family.prefix()));
        }
    }

    #[test]
    fn test_family_templates() {
        assert_eq!(
            ApiFamily::BetaExport.path("behavior-data"),
            "api/beta/export/get-behavior-data.php"
        );
        assert_eq!(ApiFamily::BetaBank.path("bank-book"), "api/beta/bank/get-bank-book.php");
        assert_eq!(ApiFamily::V1.path("coaching/evidence"), "api/v1/coaching/evidence");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let result = lookup("grades");
        assert!(matches!(
            result,
            Err(DeansListError::UnknownEndpoint { name }) if name == "grades"
        ));
    }

    #[test]
    fn test_collection_and_resource_share_a_path() {
        let rosters = lookup("rosters").unwrap();
        let roster = lookup("roster").unwrap();

        assert_eq!(rosters.path(), roster.path());
        assert_eq!(rosters.cardinality, Cardinality::Collection);
        assert_eq!(roster.cardinality, Cardinality::Resource);
    }

    #[test]
    fn test_resource_requires_exactly_one_id() {
        let spec = lookup("coaching_observation").unwrap();

        assert_eq!(
            spec.resolve_path(&["99"]).unwrap(),
            "api/v1/coaching/observation/99"
        );
        assert!(matches!(
            spec.resolve_path(&[]),
            Err(DeansListError::InvalidArguments { expected: 1, given: 0, .. })
        ));
        assert!(matches!(
            spec.resolve_path(&["1", "2"]),
            Err(DeansListError::InvalidArguments { expected: 1, given: 2, .. })
        ));
    }

    #[test]
    fn test_blank_id_is_not_an_id() {
        let spec = lookup("roster").unwrap();

        for blank in ["", "  "] {
            assert!(matches!(
                spec.resolve_path(&[blank]),
                Err(DeansListError::InvalidArguments { expected: 1, given: 0, .. })
            ));
        }
    }

    #[test]
    fn test_id_cannot_reshape_the_url() {
        let spec = lookup("roster").unwrap();

        for id in ["1?rt=ALL", "a/b", "1#x", "..", ".", "1 2", "1%2F2", "1&rt=ALL"] {
            match spec.resolve_path(&[id]) {
                Err(DeansListError::InvalidIdentifier { endpoint, id: rejected }) => {
                    assert_eq!(endpoint, "roster");
                    assert_eq!(rejected, id);
                }
                other => panic!("{id:?} was accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unreserved_ids_are_accepted() {
        let spec = lookup("list").unwrap();
        assert_eq!(
            spec.resolve_path(&["A-12_b.3~"]).unwrap(),
            "api/v1/lists/A-12_b.3~"
        );
    }

    #[test]
    fn test_collection_rejects_ids() {
        let spec = lookup("rosters").unwrap();

        assert_eq!(spec.resolve_path(&[]).unwrap(), "api/v1/rosters");
        assert!(matches!(
            spec.resolve_path(&["5"]),
            Err(DeansListError::InvalidArguments { expected: 0, given: 1, .. })
        ));
    }

    #[test]
    fn test_validate_params_names_offending_key() {
        let spec = lookup("points").unwrap();

        assert!(spec.validate_params(["rid", "sid"]).is_ok());
        match spec.validate_params(["rid", "RosterID"]) {
            Err(DeansListError::InvalidParameter { endpoint, key, valid }) => {
                assert_eq!(endpoint, "points");
                assert_eq!(key, "RosterID");
                assert_eq!(valid, &["rid", "sid", "stus"]);
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_params_are_case_sensitive() {
        let spec = lookup("students").unwrap();
        assert!(spec.allows("StudentID"));
        assert!(!spec.allows("studentid"));
    }

    #[test]
    fn test_accessor_names_mirror_registry() {
        let accessors = accessor_names();
        assert_eq!(accessors.len(), ENDPOINTS.len());
        assert!(accessors.contains(&"get_all_coaching_evidence".to_string()));
        assert!(accessors.contains(&"get_roster".to_string()));
    }
}
