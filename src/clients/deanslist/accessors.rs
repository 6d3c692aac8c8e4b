//! One accessor per registry entry.
//!
//! Each method forwards to [`DeansList::fetch`] with its endpoint name, so
//! callers get a typo-proof method per resource. Collection accessors take
//! [`QueryParams`]; resource accessors take the record's identifier.
//!
//! All accessors return the same errors as [`DeansList::fetch`].

use std::fmt::Display;

use super::DeansList;
use crate::error::DeansListError;
use crate::rest::{Payload, QueryParams};

impl DeansList {
    /// Fetches behavior incidents and point transactions.
    pub async fn get_behavior(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("behavior", &[], params).await
    }

    /// Fetches homework records.
    pub async fn get_homework(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("homework", &[], params).await
    }

    /// Fetches parent communication logs.
    pub async fn get_communications(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("communications", &[], params).await
    }

    /// Fetches staff users.
    pub async fn get_users(&self, params: &QueryParams) -> Result<Option<Payload>, DeansListError> {
        self.fetch("users", &[], params).await
    }

    /// Fetches students, optionally with parents and unenrolled students.
    pub async fn get_students(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("students", &[], params).await
    }

    /// Fetches roster assignments from the export API.
    pub async fn get_roster_assignments(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("roster_assignments", &[], params).await
    }

    /// Fetches the points bank book.
    pub async fn get_points(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("points", &[], params).await
    }

    /// Fetches referrals.
    pub async fn get_referrals(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("referrals", &[], params).await
    }

    /// Fetches suspensions.
    pub async fn get_suspensions(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("suspensions", &[], params).await
    }

    /// Fetches incidents.
    pub async fn get_incidents(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("incidents", &[], params).await
    }

    /// Fetches follow-ups.
    pub async fn get_followups(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("followups", &[], params).await
    }

    /// Fetches lists.
    pub async fn get_lists(&self, params: &QueryParams) -> Result<Option<Payload>, DeansListError> {
        self.fetch("lists", &[], params).await
    }

    /// Fetches terms.
    pub async fn get_terms(&self, params: &QueryParams) -> Result<Option<Payload>, DeansListError> {
        self.fetch("terms", &[], params).await
    }

    /// Fetches daily attendance.
    pub async fn get_daily_attendance(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("daily_attendance", &[], params).await
    }

    /// Fetches class attendance.
    pub async fn get_class_attendance(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("class_attendance", &[], params).await
    }

    /// Fetches rosters.
    pub async fn get_rosters(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("rosters", &[], params).await
    }

    /// Fetches coaching observations.
    pub async fn get_coaching_observations(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("coaching_observations", &[], params).await
    }

    /// Fetches coaching evidence.
    pub async fn get_all_coaching_evidence(
        &self,
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("all_coaching_evidence", &[], params).await
    }

    /// Fetches one list by id.
    pub async fn get_list(&self, id: impl Display) -> Result<Option<Payload>, DeansListError> {
        self.fetch("list", &[&id.to_string()], &QueryParams::new()).await
    }

    /// Fetches one roster by id.
    pub async fn get_roster(&self, id: impl Display) -> Result<Option<Payload>, DeansListError> {
        self.fetch("roster", &[&id.to_string()], &QueryParams::new()).await
    }

    /// Fetches one coaching observation by id.
    pub async fn get_coaching_observation(
        &self,
        id: impl Display,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("coaching_observation", &[&id.to_string()], &QueryParams::new()).await
    }

    /// Fetches one piece of coaching evidence by id.
    pub async fn get_coaching_evidence(
        &self,
        id: impl Display,
    ) -> Result<Option<Payload>, DeansListError> {
        self.fetch("coaching_evidence", &[&id.to_string()], &QueryParams::new()).await
    }
}
