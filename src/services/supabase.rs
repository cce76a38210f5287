use crate::models::{CandidateSkillProfile, MentorProfile};
use crate::services::store::{ProfileStore, StoreError};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub candidate_profiles: String,
    pub mentor_profiles: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            candidate_profiles: "candidate_profiles".to_string(),
            mentor_profiles: "mentor_profiles".to_string(),
        }
    }
}

/// Supabase REST (PostgREST) client
///
/// Handles all reads the matcher needs from the hosted backend:
/// - Fetching a candidate's skill profile
/// - Listing mentors that accept new mentees
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    async fn get(&self, url: &str) -> Result<Response, StoreError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read body".to_string());
                Err(StoreError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, StoreError> {
        let response = self.get(url).await?;
        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse rows: {}", e)))
    }
}

#[async_trait]
impl ProfileStore for SupabaseClient {
    async fn get_candidate_skill_profile(
        &self,
        candidate_id: &str,
    ) -> Result<Option<CandidateSkillProfile>, StoreError> {
        let url = format!(
            "{}?select=skills,industry&user_id=eq.{}&limit=1",
            self.table_url(&self.tables.candidate_profiles),
            urlencoding::encode(candidate_id)
        );

        tracing::debug!("Fetching skill profile for candidate: {}", candidate_id);

        let mut rows: Vec<CandidateSkillProfile> = self.get_rows(&url).await?;

        if rows.is_empty() {
            tracing::debug!("No skill profile for candidate {}", candidate_id);
            return Ok(None);
        }

        Ok(Some(rows.swap_remove(0)))
    }

    async fn list_accepting_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        // PostgREST cannot compare two columns, so capacity is filtered by the caller
        let url = format!(
            "{}?select=*&is_accepting_mentees=eq.true&order=id.asc",
            self.table_url(&self.tables.mentor_profiles)
        );

        let mentors: Vec<MentorProfile> = self.get_rows(&url).await?;

        tracing::debug!("Fetched {} accepting mentors", mentors.len());

        Ok(mentors)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        let url = format!(
            "{}?select=id&limit=1",
            self.table_url(&self.tables.mentor_profiles)
        );
        self.get(&url).await.map(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(url: String) -> SupabaseClient {
        SupabaseClient::new(
            url,
            "test_key".to_string(),
            SupabaseTables::default(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_supabase_client_creation() {
        let client = client_for("https://project.supabase.co/".to_string());

        assert_eq!(
            client.table_url("mentor_profiles"),
            "https://project.supabase.co/rest/v1/mentor_profiles"
        );
        assert_eq!(client.api_key, "test_key");
    }

    #[tokio::test]
    async fn test_get_candidate_skill_profile() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex(r"^/rest/v1/candidate_profiles".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("user_id".into(), "eq.cand 1".into()),
                Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .match_header("apikey", "test_key")
            .match_header("authorization", "Bearer test_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"skills":["React","Node.js"],"industry":"Software"}]"#)
            .create_async()
            .await;

        let client = client_for(server.url());
        let profile = client.get_candidate_skill_profile("cand 1").await.unwrap().unwrap();

        assert_eq!(profile.skills, vec!["React", "Node.js"]);
        assert_eq!(profile.industry.as_deref(), Some("Software"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_candidate_is_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex(r"^/rest/v1/candidate_profiles".to_string()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(server.url());
        assert!(client.get_candidate_skill_profile("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_accepting_mentors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex(r"^/rest/v1/mentor_profiles".to_string()))
            .match_query(Matcher::UrlEncoded("is_accepting_mentees".into(), "eq.true".into()))
            .with_status(200)
            .with_body(
                r#"[
                    {"id":"m1","specializations":["Python"],"industry":"Tech","years_experience":7,
                     "max_mentees":3,"current_mentees":1,"is_accepting_mentees":true,
                     "avg_rating":4.6,"total_observations":12,"total_endorsements":5},
                    {"id":"m2","specializations":null,"industry":null,"years_experience":null,
                     "max_mentees":2,"current_mentees":2,"is_accepting_mentees":true,
                     "avg_rating":null,"total_observations":null,"total_endorsements":null}
                ]"#,
            )
            .create_async()
            .await;

        let client = client_for(server.url());
        let mentors = client.list_accepting_mentors().await.unwrap();

        assert_eq!(mentors.len(), 2);
        assert_eq!(mentors[0].avg_rating, Some(4.6));
        assert!(mentors[1].specializations.is_empty());
        assert_eq!(mentors[1].industry, "");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex(r"^/rest/v1/mentor_profiles".to_string()))
            .with_status(401)
            .with_body(r#"{"message":"Invalid API key"}"#)
            .create_async()
            .await;

        let client = client_for(server.url());
        let err = client.list_accepting_mentors().await.unwrap_err();

        assert!(matches!(err, StoreError::Unauthorized));
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex(r"^/rest/v1/mentor_profiles".to_string()))
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = client_for(server.url());
        match client.list_accepting_mentors().await {
            Err(StoreError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex(r"^/rest/v1/mentor_profiles".to_string()))
            .with_status(200)
            .with_body(r#"{"not":"an array"}"#)
            .create_async()
            .await;

        let client = client_for(server.url());
        let err = client.list_accepting_mentors().await.unwrap_err();

        assert!(matches!(err, StoreError::InvalidResponse(_)));
    }
}
