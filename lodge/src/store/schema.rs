//! SQLite schema definitions and SQL constants.
//!
//! One table per record collection, plus a metadata table carrying the
//! schema version. Dates are stored as ISO-8601 TEXT (`YYYY-MM-DD`),
//! timestamps as RFC 3339 TEXT, and list or map fields as JSON TEXT.

/// Current schema version for the store.
///
/// Stored in the metadata table and checked on open to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the customers table.
pub const CREATE_CUSTOMERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY NOT NULL,
        full_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT
    )";

/// SQL statement to create the properties table.
pub const CREATE_PROPERTIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS properties (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        description TEXT
    )";

/// SQL statement to create the units table.
pub const CREATE_UNITS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS units (
        id TEXT PRIMARY KEY NOT NULL,
        property_id TEXT NOT NULL,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        price_per_night REAL NOT NULL,
        amenities TEXT NOT NULL
    )";

/// SQL statement to create the add-ons table.
pub const CREATE_ADDONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS addons (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        description TEXT
    )";

/// SQL statement to create the rate plans table.
pub const CREATE_RATE_PLANS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rate_plans (
        id TEXT PRIMARY KEY NOT NULL,
        unit_id TEXT NOT NULL,
        name TEXT NOT NULL,
        base_price REAL NOT NULL,
        min_nights INTEGER NOT NULL,
        max_nights INTEGER,
        weekend_surcharge REAL NOT NULL
    )";

/// SQL statement to create the reservations table.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        customer_id TEXT NOT NULL,
        unit_id TEXT NOT NULL,
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        adults INTEGER NOT NULL,
        children INTEGER NOT NULL,
        status TEXT NOT NULL,
        addons TEXT NOT NULL,
        created_at TEXT NOT NULL
    )";

/// SQL statement to create the payments table.
pub const CREATE_PAYMENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS payments (
        id TEXT PRIMARY KEY NOT NULL,
        reservation_id TEXT NOT NULL,
        amount REAL NOT NULL,
        currency TEXT NOT NULL,
        status TEXT NOT NULL,
        transaction_reference TEXT,
        paid_at TEXT
    )";

/// SQL statement to create the waitlist table.
pub const CREATE_WAITLIST_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS waitlist (
        id TEXT PRIMARY KEY NOT NULL,
        unit_id TEXT NOT NULL,
        customer_id TEXT NOT NULL,
        desired_check_in TEXT NOT NULL,
        desired_check_out TEXT NOT NULL,
        created_at TEXT NOT NULL,
        notified INTEGER NOT NULL
    )";

/// SQL statement to create the audit log table.
pub const CREATE_AUDIT_LOG_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS audit_log (
        id TEXT PRIMARY KEY NOT NULL,
        event_type TEXT NOT NULL,
        payload TEXT NOT NULL,
        created_at TEXT NOT NULL
    )";

/// SQL statement to create the inventory snapshots table.
pub const CREATE_INVENTORY_SNAPSHOTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS inventory_snapshots (
        id TEXT PRIMARY KEY NOT NULL,
        unit_id TEXT NOT NULL,
        date TEXT NOT NULL,
        is_available INTEGER NOT NULL,
        generated_at TEXT NOT NULL
    )";

/// SQL statement to create an index on the reservations unit column.
///
/// Availability checks scan a single unit's reservations.
pub const CREATE_RESERVATIONS_UNIT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_unit ON reservations(unit_id)";

/// SQL statement to create an index on the rate plans unit column.
pub const CREATE_RATE_PLANS_UNIT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rate_plans_unit ON rate_plans(unit_id)";

/// SQL statement to create an index on the payments reservation column.
pub const CREATE_PAYMENTS_RESERVATION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_payments_reservation ON payments(reservation_id)";

/// SQL statement to create an index on the waitlist unit column.
pub const CREATE_WAITLIST_UNIT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_waitlist_unit ON waitlist(unit_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
