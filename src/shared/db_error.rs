use sea_orm::DbErr;

// Driver messages that mean the store itself is unreachable, as opposed to
// a query that reached it and failed.
const CONNECTION_MARKERS: [&str; 7] = [
    "connection refused",
    "connection reset",
    "connection closed",
    "broken pipe",
    "pool timed out",
    "timed out while waiting for an open connection",
    "error communicating with database",
];

/// True when `err` comes from the connection layer (refused, dropped,
/// pool exhausted) rather than from the statement itself.
pub fn is_connection_error(err: &DbErr) -> bool {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        other => {
            let msg = other.to_string().to_lowercase();
            CONNECTION_MARKERS.iter().any(|marker| msg.contains(marker))
        }
    }
}
