//! Supported SQL dialects.

/// SQL dialect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    PostgreSQL,
    MySQL,
    SQLite,
}

impl Dialect {
    /// Parse dialect from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::PostgreSQL),
            "mysql" => Some(Self::MySQL),
            "sqlite" | "sqlite3" => Some(Self::SQLite),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PostgreSQL => "postgresql",
            Self::MySQL => "mysql",
            Self::SQLite => "sqlite",
        }
    }

    /// Column clause for an auto-incrementing integer primary key.
    pub fn auto_increment_key(&self, big: bool) -> &'static str {
        match (self, big) {
            (Self::PostgreSQL, false) => "SERIAL PRIMARY KEY",
            (Self::PostgreSQL, true) => "BIGSERIAL PRIMARY KEY",
            (Self::MySQL, false) => "INTEGER PRIMARY KEY AUTO_INCREMENT",
            (Self::MySQL, true) => "BIGINT PRIMARY KEY AUTO_INCREMENT",
            // sqlite only auto-increments INTEGER PRIMARY KEY
            (Self::SQLite, _) => "INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Dialect::from_str("PostgreSQL"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::from_str("postgres"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::from_str("mysql"), Some(Dialect::MySQL));
        assert_eq!(Dialect::from_str("sqlite3"), Some(Dialect::SQLite));
        assert_eq!(Dialect::from_str("oracle"), None);
    }

    #[test]
    fn test_auto_increment() {
        assert_eq!(Dialect::PostgreSQL.auto_increment_key(false), "SERIAL PRIMARY KEY");
        assert_eq!(
            Dialect::MySQL.auto_increment_key(false),
            "INTEGER PRIMARY KEY AUTO_INCREMENT"
        );
        assert_eq!(
            Dialect::SQLite.auto_increment_key(true),
            "INTEGER PRIMARY KEY AUTOINCREMENT"
        );
    }
}
