//! # Supabase Store
//!
//! View counters in a Supabase table, accessed through its PostgREST API.
//! The table has a unique `slug` column and an integer `views` column.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::ViewStore;
use crate::{config::SupabaseCredentials, constants::VIEWS_HTTP_TIMEOUT_SECS};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("Supabase returned an error: {status}")]
    SupabaseError { status: u16 },
}

impl From<ureq::Error> for RequestError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(status, _) => Self::SupabaseError { status },
            other => Self::Http(Box::new(other)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ViewRow {
    views: u64,
}

/// PostgREST-backed view store
pub struct SupabaseStore {
    agent: ureq::Agent,
    endpoint: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(credentials: SupabaseCredentials, table: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(VIEWS_HTTP_TIMEOUT_SECS))
            .build();

        Self {
            agent,
            endpoint: format!("{}/rest/v1/{table}", credentials.url.trim_end_matches('/')),
            anon_key: credentials.anon_key,
        }
    }

    /// Table endpoint, e.g. `https://x.supabase.co/rest/v1/page_views`
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: &str) -> ureq::Request {
        self.agent
            .request(method, &self.endpoint)
            .set("apikey", &self.anon_key)
            .set("Authorization", &format!("Bearer {}", self.anon_key))
            .set("Content-Type", "application/json")
    }

    fn read_rows(response: ureq::Response) -> Result<Vec<ViewRow>> {
        response
            .into_json()
            .context("Supabase response is not a list of view rows")
    }

    /// Stored count from a `return=representation` response, falling back
    /// to the value that was sent.
    fn returned_views(response: ureq::Response, sent: u64) -> Result<u64> {
        let rows = Self::read_rows(response)?;
        Ok(rows.first().map_or(sent, |row| row.views))
    }
}

impl ViewStore for SupabaseStore {
    fn fetch(&self, slug: &str) -> Result<Option<u64>> {
        tracing::debug!(slug, endpoint = %self.endpoint, "fetching views");

        let response = self
            .request("GET")
            .query("slug", &format!("eq.{slug}"))
            .query("select", "views")
            .call()
            .map_err(RequestError::from)
            .context("Fetching views from Supabase")?;

        let rows = Self::read_rows(response)?;
        Ok(rows.first().map(|row| row.views))
    }

    fn insert(&self, slug: &str, views: u64) -> Result<u64> {
        tracing::debug!(slug, views, "inserting view row");

        let response = self
            .request("POST")
            .set("Prefer", "return=representation")
            .send_json(json!({ "slug": slug, "views": views }))
            .map_err(RequestError::from)
            .context("Inserting view row into Supabase")?;

        Self::returned_views(response, views)
    }

    fn update(&self, slug: &str, views: u64) -> Result<u64> {
        tracing::debug!(slug, views, "updating view row");

        let response = self
            .request("PATCH")
            .query("slug", &format!("eq.{slug}"))
            .set("Prefer", "return=representation")
            .send_json(json!({ "views": views }))
            .map_err(RequestError::from)
            .context("Updating view row in Supabase")?;

        Self::returned_views(response, views)
    }
}
