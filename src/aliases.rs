use rusqlite::Connection;

use crate::db;
use crate::error::Result;

/// Common names of the Islamic Penal Code and the code they resolve to.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("قانون مجازات اسلامی", "حقوق_جزا"),
    ("ق.م.ا", "حقوق_جزا"),
    ("مجازات اسلامی", "حقوق_جزا"),
    ("Islamic Penal Code", "حقوق_جزا"),
    ("Iran Penal Code", "حقوق_جزا"),
];

/// Create `law_aliases` if needed and upsert `aliases` into it.
pub fn migrate(conn: &Connection, aliases: &[(&str, &str)]) -> Result<usize> {
    db::init_alias_schema(conn)?;
    db::upsert_aliases(conn, aliases)
}
