//
//  fcp-client
//  input/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Input Provider Seam
//!
//! When a call is missing required fields, the engine describes them as
//! [`PromptField`]s and delegates to an [`InputProvider`] to gather values.
//! The provider is a seam: the engine never cares whether answers come from
//! a terminal, a test fixture, or another process.
//!
//! Two implementations ship with the crate:
//!
//! - [`TerminalPrompt`] — interactive prompts via `dialoguer`, with
//!   integer parsing, pattern validation, and styled hint messages.
//! - [`NoInput`] — answers nothing; combined with
//!   [`RequestOptions::non_interactive`](crate::RequestOptions::non_interactive)
//!   this leaves validation entirely to the server.
//!
//! # Example
//!
//! ```rust
//! use fcp_client::input::{prompt_field, PromptKind};
//! use fcp_client::options::Field;
//!
//! let spec = prompt_field(Field::ClientId);
//! assert!(spec.required);
//! assert_eq!(spec.kind, PromptKind::Integer);
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use console::style;
use dialoguer::{Input, Password};
use regex::Regex;

use crate::options::{Field, OptionValue};

/// The value type a prompt should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free-form text.
    Text,
    /// An integer (client ids, code ids).
    Integer,
}

/// Description of one missing field handed to an [`InputProvider`].
#[derive(Debug, Clone)]
pub struct PromptField {
    /// Whether an answer is mandatory.
    pub required: bool,
    /// The expected value type.
    pub kind: PromptKind,
    /// Whether input should be masked (credentials).
    pub hidden: bool,
    /// An anchored regex the answer must match, if any.
    pub pattern: Option<&'static str>,
    /// A hint shown alongside the prompt, if any.
    pub message: Option<&'static str>,
}

impl Default for PromptField {
    fn default() -> Self {
        Self {
            required: true,
            kind: PromptKind::Text,
            hidden: false,
            pattern: None,
            message: None,
        }
    }
}

const PATH_HINT: &str =
    "This is the relative or absolute path to the file, including the extension";

/// Returns the prompt description for a field.
///
/// Carries the platform's per-field conventions: integer ids, the
/// vendor/prerelease code character hints, path help text, and the
/// `true`/`false`/`invalid` pattern on `latest`.
pub fn prompt_field(field: Field) -> PromptField {
    match field {
        Field::ClientId => PromptField {
            kind: PromptKind::Integer,
            message: Some("Client ID should be a non-zero integer."),
            ..Default::default()
        },
        Field::CodeId => PromptField {
            kind: PromptKind::Integer,
            message: Some("Code ID should be a non-zero integer."),
            ..Default::default()
        },
        Field::Metadata => PromptField {
            message: Some(
                "Metadata can be the website URL, client contact name, other trademarks, \
                 etc. This is useful for searching.",
            ),
            ..Default::default()
        },
        Field::VendorCode | Field::PrereleaseCode => PromptField {
            message: Some("8 char limit, accepted chars A-Z/a-z"),
            ..Default::default()
        },
        Field::Latest => PromptField {
            pattern: Some("^(true|false|invalid)$"),
            message: Some("Latest: true/false/invalid."),
            ..Default::default()
        },
        Field::ConfigStr => PromptField {
            message: Some("This is the javascript config you want to upload, stringified"),
            ..Default::default()
        },
        Field::CodePath
        | Field::ConfigPath
        | Field::FilePath
        | Field::JsonPath
        | Field::ModulePath => PromptField {
            message: Some(PATH_HINT),
            ..Default::default()
        },
        _ => PromptField::default(),
    }
}

/// Source of answers for missing required fields.
///
/// Implementations return a value per field, or fail; the engine wraps a
/// failure into [`Error::Input`](crate::Error::Input). Returning fewer
/// answers than requested is allowed — unanswered fields stay missing and
/// are validated afterwards.
#[async_trait]
pub trait InputProvider: Send + Sync {
    /// Gathers values for the described fields.
    async fn gather(
        &self,
        requests: &[(Field, PromptField)],
    ) -> anyhow::Result<BTreeMap<Field, OptionValue>>;
}

/// A provider that never answers.
///
/// Useful for scripted callers that pre-populate every field, and for
/// tests that assert on the unanswered path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

#[async_trait]
impl InputProvider for NoInput {
    async fn gather(
        &self,
        _requests: &[(Field, PromptField)],
    ) -> anyhow::Result<BTreeMap<Field, OptionValue>> {
        Ok(BTreeMap::new())
    }
}

/// Interactive terminal provider built on `dialoguer`.
///
/// Hints are printed dimmed above the prompt; integer fields re-prompt
/// until they parse; pattern-constrained fields re-prompt until they
/// match.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn ask(field: Field, spec: &PromptField) -> anyhow::Result<OptionValue> {
        if let Some(message) = spec.message {
            eprintln!("{}", style(message).dim());
        }
        let label = field.key();

        if spec.hidden {
            let answer = Password::new().with_prompt(label).interact()?;
            return Ok(OptionValue::Str(answer));
        }

        match spec.kind {
            PromptKind::Integer => {
                let answer: i64 = Input::new().with_prompt(label).interact_text()?;
                Ok(OptionValue::Int(answer))
            }
            PromptKind::Text => {
                let mut input = Input::new().with_prompt(label);
                if let Some(pattern) = spec.pattern {
                    let re = Regex::new(pattern).expect("static prompt patterns are valid");
                    input = input.validate_with(move |value: &String| {
                        if re.is_match(value) {
                            Ok(())
                        } else {
                            Err(format!("value must match {}", re.as_str()))
                        }
                    });
                }
                let answer: String = input.interact_text()?;
                Ok(OptionValue::Str(answer))
            }
        }
    }
}

#[async_trait]
impl InputProvider for TerminalPrompt {
    async fn gather(
        &self,
        requests: &[(Field, PromptField)],
    ) -> anyhow::Result<BTreeMap<Field, OptionValue>> {
        let mut answers = BTreeMap::new();
        for (field, spec) in requests {
            answers.insert(*field, Self::ask(*field, spec)?);
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_fields_prompt_as_integers() {
        assert_eq!(prompt_field(Field::ClientId).kind, PromptKind::Integer);
        assert_eq!(prompt_field(Field::CodeId).kind, PromptKind::Integer);
        assert_eq!(prompt_field(Field::Notes).kind, PromptKind::Text);
    }

    #[test]
    fn test_latest_carries_pattern() {
        let spec = prompt_field(Field::Latest);
        let re = Regex::new(spec.pattern.unwrap()).unwrap();
        assert!(re.is_match("true"));
        assert!(re.is_match("invalid"));
        assert!(!re.is_match("maybe"));
    }

    #[test]
    fn test_path_fields_share_hint() {
        for field in [Field::CodePath, Field::JsonPath, Field::ModulePath] {
            assert_eq!(prompt_field(field).message, Some(PATH_HINT));
        }
    }

    #[tokio::test]
    async fn test_no_input_answers_nothing() {
        let requests = vec![(Field::Notes, prompt_field(Field::Notes))];
        let answers = NoInput.gather(&requests).await.unwrap();
        assert!(answers.is_empty());
    }
}
