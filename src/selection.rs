//! Ingredient selection: the free-text field and the tag list it is kept in
//! step with.
//!
//! Both representations live side by side. Whichever entry point ran last
//! decides: typing re-derives the tags from the text, tag actions re-derive the
//! text from the tags. Neither field is writable from outside this module.

/// Character limit of the free-text field. Enforced by the input surface, not here.
pub const MAX_INPUT_CHARS: usize = 200;

/// Maximum number of recent-search chips shown at once
pub const MAX_RECENT_SEARCHES: usize = 5;

const TOKEN_SEPARATOR: &str = ", ";

/// A tappable suggestion chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub name: &'static str,
    /// Emoji or icon-set name
    pub icon: &'static str,
    /// Chip background as a hex color
    pub color: &'static str,
}

impl Suggestion {
    /// The token a tap on this chip adds
    pub fn token(&self) -> String {
        self.name.to_lowercase()
    }
}

pub const POPULAR_INGREDIENTS: [Suggestion; 8] = [
    Suggestion { name: "Chicken", icon: "🐔", color: "#FFE4B5" },
    Suggestion { name: "Beef", icon: "🥩", color: "#FFB6C1" },
    Suggestion { name: "Fish", icon: "🐟", color: "#E0F6FF" },
    Suggestion { name: "Pasta", icon: "🍝", color: "#FFF8DC" },
    Suggestion { name: "Rice", icon: "🍚", color: "#F5F5DC" },
    Suggestion { name: "Vegetables", icon: "🥕", color: "#F0FFF0" },
    Suggestion { name: "Cheese", icon: "🧀", color: "#FFFACD" },
    Suggestion { name: "Eggs", icon: "🥚", color: "#FFF8DC" },
];

pub const DIETARY_OPTIONS: [Suggestion; 6] = [
    Suggestion { name: "Vegetarian", icon: "leaf-outline", color: "#90EE90" },
    Suggestion { name: "Vegan", icon: "flower-outline", color: "#98FB98" },
    Suggestion { name: "Gluten-Free", icon: "medical-outline", color: "#FFE4B5" },
    Suggestion { name: "Keto", icon: "fitness-outline", color: "#F0E68C" },
    Suggestion { name: "Low-Carb", icon: "barbell-outline", color: "#DDA0DD" },
    Suggestion { name: "Healthy", icon: "heart-outline", color: "#FFB6C1" },
];

/// In-session recent searches. Nothing is persisted.
pub const RECENT_SEARCHES: [&str; 5] = ["chicken breast", "pasta", "tomatoes", "garlic", "onions"];

/// The recent-search chips to display
pub fn recent_searches() -> &'static [&'static str] {
    &RECENT_SEARCHES[..RECENT_SEARCHES.len().min(MAX_RECENT_SEARCHES)]
}

/// What the user wants to search for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSelection {
    raw_text: String,
    tokens: Vec<String>,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The literal contents of the text field
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The discrete ingredient tags, in insertion order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Length of the text field in characters, for the `n/200` counter
    pub fn char_count(&self) -> usize {
        self.raw_text.chars().count()
    }

    /// The user typed into the text field.
    ///
    /// Tags are re-derived by splitting on commas; duplicates are kept.
    pub fn set_from_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
        self.tokens = split_tokens(&self.raw_text);
    }

    /// The user tapped a chip. Appends `token` unless it is already a tag.
    pub fn add_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        if self.tokens.contains(&token) {
            return;
        }
        self.tokens.push(token);
        self.sync_text();
    }

    /// Removes every tag equal to `token`
    pub fn remove_token(&mut self, token: &str) {
        self.tokens.retain(|existing| existing != token);
        self.sync_text();
    }

    /// Adds the lower-cased name of a suggestion chip
    pub fn add_suggestion(&mut self, suggestion: &Suggestion) {
        self.add_token(suggestion.token());
    }

    /// Adds a recent search, as typed
    pub fn select_recent(&mut self, item: &str) {
        self.add_token(item);
    }

    pub fn clear(&mut self) {
        self.raw_text.clear();
        self.tokens.clear();
    }

    /// Whether the search button should be enabled
    pub fn is_submittable(&self) -> bool {
        !self.raw_text.trim().is_empty()
    }

    /// Value for the `includeIngredients` parameter
    pub fn query(&self) -> String {
        self.tokens.join(",")
    }

    fn sync_text(&mut self) {
        self.raw_text = self.tokens.join(TOKEN_SEPARATOR);
    }
}

fn split_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}
