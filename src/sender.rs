use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{LabelError, Result};

/// The "ship from" address stamped on every label.
///
/// Keys missing from the stored document deserialize as empty strings and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderAddress {
    #[serde(rename = "FromCountry")]
    pub country: String,
    #[serde(rename = "FromName")]
    pub name: String,
    #[serde(rename = "FromCompany")]
    pub company: String,
    #[serde(rename = "FromPhone")]
    pub phone: String,
    #[serde(rename = "FromStreet1")]
    pub street1: String,
    #[serde(rename = "FromStreet2")]
    pub street2: String,
    #[serde(rename = "FromCity")]
    pub city: String,
    #[serde(rename = "FromZip")]
    pub zip: String,
    #[serde(rename = "FromState")]
    pub state: String,
}

/// Partial edit of a sender address; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SenderUpdate {
    pub country: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub state: Option<String>,
}

impl SenderAddress {
    pub fn apply(&mut self, update: SenderUpdate) {
        let fields = [
            (&mut self.country, update.country),
            (&mut self.name, update.name),
            (&mut self.company, update.company),
            (&mut self.phone, update.phone),
            (&mut self.street1, update.street1),
            (&mut self.street2, update.street2),
            (&mut self.city, update.city),
            (&mut self.zip, update.zip),
            (&mut self.state, update.state),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Look up a field by its `From*` column name.
    pub fn field(&self, column: &str) -> Option<&str> {
        let value = match column {
            "FromCountry" => &self.country,
            "FromName" => &self.name,
            "FromCompany" => &self.company,
            "FromPhone" => &self.phone,
            "FromStreet1" => &self.street1,
            "FromStreet2" => &self.street2,
            "FromCity" => &self.city,
            "FromZip" => &self.zip,
            "FromState" => &self.state,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Flat JSON document persisting the sender address between runs.
#[derive(Debug, Clone)]
pub struct SenderStore {
    path: PathBuf,
}

impl SenderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the stored sender. A missing store means the sender was never set up.
    pub fn load(&self) -> Result<SenderAddress> {
        if !self.exists() {
            return Err(LabelError::SenderNotConfigured(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let sender: SenderAddress = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "Loaded sender address");
        Ok(sender)
    }

    /// Stored sender, or empty defaults when nothing has been saved yet.
    pub fn load_or_default(&self) -> Result<SenderAddress> {
        match self.load() {
            Err(LabelError::SenderNotConfigured(_)) => Ok(SenderAddress::default()),
            other => other,
        }
    }

    pub fn save(&self, sender: &SenderAddress) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(sender)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "Saved sender address");
        Ok(())
    }
}
