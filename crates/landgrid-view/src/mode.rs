use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Which quantity the tile colors encode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Base,
    Tax,
    Zoning,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Base, ViewMode::Tax, ViewMode::Zoning];

    pub fn id(self) -> &'static str {
        match self {
            ViewMode::Base => "base",
            ViewMode::Tax => "tax",
            ViewMode::Zoning => "zoning",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownViewMode(s.to_string()))
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("tax".parse::<ViewMode>().unwrap(), ViewMode::Tax);
        assert_eq!(" Zoning ".parse::<ViewMode>().unwrap(), ViewMode::Zoning);
        assert!(matches!(
            "height".parse::<ViewMode>(),
            Err(ModelError::UnknownViewMode(s)) if s == "height"
        ));
    }

    #[test]
    fn test_display_matches_id() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
    }
}
