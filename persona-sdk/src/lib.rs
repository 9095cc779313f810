//! Persona Lab SDK
//!
//! Typed client for the Persona Lab API. It models the two interactive
//! pieces of the application as explicit state owned by the caller:
//!
//! - [`AssessmentForm`]: the seven-question form with per-field validation,
//!   a single in-flight submission, and an explicit reset.
//! - [`DatasetTable`]: the append-only, load-more view of the training
//!   dataset.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use persona_sdk::{PersonaClient, SdkConfig};
//! use persona_core::{FlagField, NumericField};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PersonaClient::new(SdkConfig::new("http://localhost:3000"))?;
//!
//!     let mut form = client.form();
//!     form.set_field(NumericField::TimeSpentAlone, 40.0);
//!     form.set_field(NumericField::SocialEventAttendance, 5.0);
//!     form.set_field(NumericField::GoingOutside, 12.0);
//!     form.set_field(NumericField::FriendsCircleSize, 8.0);
//!     form.set_field(NumericField::PostFrequency, 3.0);
//!     form.set_flag(FlagField::StageFear, true);
//!
//!     form.submit().await;
//!     if let Some(profile) = form.profile() {
//!         println!("You are likely an {}", profile.title);
//!     }
//!
//!     let mut table = client.table();
//!     table.load_more().await?;
//!     println!("Loaded {} rows", table.rows().len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod table;

pub use client::HttpClient;
pub use config::SdkConfig;
pub use error::{SdkError, SdkResult};
pub use form::{AssessmentForm, SubmitOutcome};
pub use table::{DatasetPage, DatasetTable};

use std::sync::Arc;

/// Entry point tying the form and the table to one HTTP client.
#[derive(Debug, Clone)]
pub struct PersonaClient {
    http: Arc<HttpClient>,
}

impl PersonaClient {
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        Ok(Self {
            http: Arc::new(HttpClient::new(config)?),
        })
    }

    /// A fresh assessment form with every field at its default.
    pub fn form(&self) -> AssessmentForm {
        AssessmentForm::new(self.http.clone())
    }

    /// An empty dataset table; the first `load_more` fetches page 1.
    pub fn table(&self) -> DatasetTable {
        DatasetTable::new(self.http.clone())
    }
}
