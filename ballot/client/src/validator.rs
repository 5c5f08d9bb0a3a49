use {
    crate::{ClientError, ClientResult, ValidationConfig},
    ballot_types::Duration,
};

/// Checks user input before it is turned into a call.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    cfg: ValidationConfig,
}

impl InputValidator {
    pub fn new(cfg: ValidationConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.cfg
    }

    /// Return the title with surrounding whitespace removed.
    pub fn validate_title<'a>(&self, title: &'a str) -> ClientResult<&'a str> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(ClientError::invalid_title("title cannot be empty"));
        }

        if title.chars().count() > self.cfg.max_title_len {
            return Err(ClientError::invalid_title(format!(
                "title too long! max: {} characters",
                self.cfg.max_title_len
            )));
        }

        if let Some(c) = title.chars().find(|c| self.cfg.forbidden_chars.contains(*c)) {
            return Err(ClientError::invalid_title(format!(
                "title contains forbidden character `{c}`"
            )));
        }

        Ok(trimmed)
    }

    /// Return the option in lowercase, the form in which it is tallied.
    pub fn validate_option(&self, option: &str) -> ClientResult<String> {
        let normalized = option.to_lowercase();

        if !self.cfg.options.iter().any(|allowed| allowed.to_lowercase() == normalized) {
            return Err(ClientError::InvalidOption {
                option: option.to_string(),
                allowed: self.cfg.options.join(", "),
            });
        }

        Ok(normalized)
    }

    pub fn validate_voting_period(&self, period: Duration) -> ClientResult<()> {
        if period < self.cfg.min_voting_period || period > self.cfg.max_voting_period {
            return Err(ClientError::InvalidVotingPeriod {
                period,
                min: self.cfg.min_voting_period,
                max: self.cfg.max_voting_period,
            });
        }

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
