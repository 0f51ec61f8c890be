pub const CREATE_ANIME: &str = r#"
CREATE TABLE IF NOT EXISTS anime (
  id       INTEGER PRIMARY KEY AUTOINCREMENT,
  name     TEXT NOT NULL,
  category TEXT NOT NULL,
  finished INTEGER NOT NULL DEFAULT 0,
  rating   REAL NOT NULL DEFAULT 0,
  seen     INTEGER NOT NULL DEFAULT 0
);
"#;

pub const INDEX_ANIME_CATEGORY: &str =
    "CREATE INDEX IF NOT EXISTS idx_anime_category ON anime(category);";

pub fn schema_statements() -> Vec<&'static str> {
    vec![CREATE_ANIME, INDEX_ANIME_CATEGORY]
}
