//! Tab selection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Franchises,
    Users,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Franchises, Tab::Users];

    /// 获取标签标题
    pub fn title(self) -> &'static str {
        match self {
            Tab::Franchises => "Franchises",
            Tab::Users => "Users",
        }
    }

    /// The tab after this one, wrapping around.
    pub fn following(self) -> Tab {
        let current = Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0);
        Tab::ALL[(current + 1) % Tab::ALL.len()]
    }
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "franchises" | "franchise" | "f" => Ok(Tab::Franchises),
            "users" | "user" | "u" => Ok(Tab::Users),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

/// A tab switch: what was shown before and what is shown now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub previous: Tab,
    pub current: Tab,
}

impl TabChange {
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

#[derive(Debug, Default)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) -> TabChange {
        let previous = self.active;
        self.active = tab;
        TabChange {
            previous,
            current: tab,
        }
    }

    /// Rotate to the following tab, wrapping around.
    pub fn next(&mut self) -> TabChange {
        self.select(self.active.following())
    }
}
