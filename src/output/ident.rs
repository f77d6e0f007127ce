use std::borrow::Cow;

// InfluxQL keywords; an identifier spelled like one needs quoting in queries.
const RESERVED: &[&str] = &[
    "ALL", "ALTER", "ANALYZE", "ANY", "AS", "ASC", "BEGIN", "BY", "CREATE",
    "CONTINUOUS", "DATABASE", "DATABASES", "DEFAULT", "DELETE", "DESC",
    "DESTINATIONS", "DIAGNOSTICS", "DISTINCT", "DROP", "DURATION", "END",
    "EVERY", "EXPLAIN", "FIELD", "FOR", "FROM", "GRANT", "GRANTS", "GROUP",
    "GROUPS", "IN", "INF", "INSERT", "INTO", "KEY", "KEYS", "KILL", "LIMIT",
    "SHOW", "MEASUREMENT", "MEASUREMENTS", "NAME", "OFFSET", "ON", "ORDER",
    "PASSWORD", "POLICY", "POLICIES", "PRIVILEGES", "QUERIES", "QUERY",
    "READ", "REPLICATION", "RESAMPLE", "RETENTION", "REVOKE", "SELECT",
    "SERIES", "SET", "SHARD", "SHARDS", "SLIMIT", "SOFFSET", "STATS",
    "SUBSCRIPTION", "SUBSCRIPTIONS", "TAG", "TO", "USER", "USERS",
    "VALUES", "WHERE", "WITH", "WRITE",
];

pub fn is_reserved(ident: &str) -> bool {
    RESERVED.iter().any(|word| word.eq_ignore_ascii_case(ident))
}

/// Renames identifiers that collide with a reserved word (`in` -> `in_`).
pub fn sanitize_identifier(ident: &str) -> Cow<str> {
    if is_reserved(ident) {
        Cow::Owned(format!("{}_", ident.to_lowercase()))
    } else {
        Cow::Borrowed(ident)
    }
}
