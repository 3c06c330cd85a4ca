use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Style used when the visitor never picked one.
pub const DEFAULT_RECIPE_STYLE: &str = "식사용";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::Invalid("malformed session id".to_string()))
    }
}

/// Everything the flow remembers about one visitor.
///
/// `ingredients` stays `None` until the first extraction; once set it is only
/// replaced by an explicit edit or by a fresh upload resetting the whole state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub filenames: Vec<String>,
    pub ingredients: Option<Vec<String>>,
    pub recipe_type: Option<Vec<String>>,
}

impl SessionState {
    pub fn with_filenames(filenames: Vec<String>) -> Self {
        Self {
            filenames,
            ..Self::default()
        }
    }

    pub fn has_uploads(&self) -> bool {
        !self.filenames.is_empty()
    }

    pub fn ingredients_or_default(&self) -> Vec<String> {
        self.ingredients.clone().unwrap_or_default()
    }

    pub fn recipe_styles(&self) -> Vec<String> {
        match &self.recipe_type {
            Some(styles) if !styles.is_empty() => styles.clone(),
            _ => vec![DEFAULT_RECIPE_STYLE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_style_falls_back_to_meal() {
        let state = SessionState::default();
        assert_eq!(state.recipe_styles(), vec!["식사용".to_string()]);
        assert!(state.ingredients_or_default().is_empty());
        assert!(!state.has_uploads());
    }

    #[test]
    fn chosen_styles_are_kept_in_order() {
        let state = SessionState {
            recipe_type: Some(vec!["간식용".to_string(), "야식용".to_string()]),
            ..SessionState::default()
        };
        assert_eq!(state.recipe_styles(), vec!["간식용", "야식용"]);
    }

    #[test]
    fn session_id_round_trips_through_display() {
        let id = SessionId::generate();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
