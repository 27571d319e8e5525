use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::InsightConfig;
use crate::dashboard::DashboardStats;
use crate::error::{Result, RosterError};
use crate::model::Team;

pub const MISSING_KEY_MESSAGE: &str =
    "Gemini API Key is missing. Please configure the environment variable to receive AI insights.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No insights available at this time.";
pub const FAILURE_MESSAGE: &str =
    "Unable to generate insights due to a network or configuration error.";

/// Teams named in the insight prompt.
pub const PROMPT_TEAM_COUNT: usize = 3;

/// Turns dashboard statistics into a short executive summary using a hosted
/// language model.
///
/// The client never fails: a missing key, transport error, bad status or
/// unreadable body each produce a fixed, human-readable sentence. There is no
/// retry and no timeout beyond what the wrapped [`reqwest::Client`] is
/// configured with.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use team_roster::{DashboardStats, DataStore, InsightClient, InsightConfig};
///
/// let today = chrono::Local::now().date_naive();
/// let store = DataStore::seeded(today);
/// let stats = DashboardStats::compute(&store, today);
/// let client = InsightClient::new(InsightConfig::from_env());
/// println!("{}", client.summarize(&stats, store.teams()).await);
/// # }
/// ```
pub struct InsightClient {
    http: reqwest::Client,
    config: InsightConfig,
}

impl InsightClient {
    pub fn new(config: InsightConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: InsightConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Summarize `stats`, naming the first [`PROMPT_TEAM_COUNT`] of `teams`.
    #[instrument(skip(self, teams))]
    pub async fn summarize(&self, stats: &DashboardStats, teams: &[Team]) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("no api key configured");
            return MISSING_KEY_MESSAGE.to_string();
        };

        let prompt = build_prompt(stats, teams);
        match self.generate(api_key, &prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(err) => {
                warn!(error = %err, "insight request failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<Option<String>> {
        let url = self.config.generate_url();
        debug!(url = %url, "requesting insight");

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RosterError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::UnexpectedStatus { url, status });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| RosterError::ResponseBody { url, source: e })?;
        Ok(parsed.text())
    }
}

pub(crate) fn build_prompt(stats: &DashboardStats, teams: &[Team]) -> String {
    let names = teams
        .iter()
        .take(PROMPT_TEAM_COUNT)
        .map(|t| t.name.as_str())
        .join(", ");
    format!(
        "Analyze the following school sports statistics for the school's teams:\n\
         - Total Players: {}\n\
         - Active Teams: {}\n\
         - Today's Attendance Check-ins: {}\n\
         - Upcoming Events: {}\n\
         - Top Performing Teams (Activity): {names}\n\n\
         Provide a 3-sentence executive summary for the Principal highlighting participation \
         trends and one suggestion for improvement. Keep it professional and encouraging.",
        stats.total_players, stats.active_teams, stats.attendance_today, stats.upcoming_events,
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Text of the first candidate, or `None` if it is empty.
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Loading flag for one insight button: at most one request in flight.
#[derive(Debug, Default)]
pub struct InsightGate {
    loading: AtomicBool,
}

impl InsightGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. `None` while another request holds it; the claim is
    /// released when the guard drops.
    pub fn try_begin(&self) -> Option<InsightGuard<'_>> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InsightGuard { gate: self })
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct InsightGuard<'a> {
    gate: &'a InsightGate,
}

impl Drop for InsightGuard<'_> {
    fn drop(&mut self) {
        self.gate.loading.store(false, Ordering::Release);
    }
}
