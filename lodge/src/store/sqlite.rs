//! SQLite-backed [`RecordStore`] implementation.
//!
//! This module owns the encoding between domain records and their
//! storage form: dates become `YYYY-MM-DD` TEXT, timestamps become
//! RFC 3339 TEXT, and list or map fields become JSON TEXT.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::domain::{
    AddOn, AuditLogEntry, Customer, InventorySnapshot, Payment, PaymentStatus, Property, RatePlan,
    Reservation, ReservationStatus, Unit, WaitlistEntry,
};
use crate::error::{Error, Result};

use super::config::StoreConfig;
use super::schema;
use super::RecordStore;

const INSERT_CUSTOMER: &str = r"
    INSERT INTO customers (id, full_name, email, phone)
    VALUES (?, ?, ?, ?)
";

const SELECT_CUSTOMERS: &str = r"
    SELECT id, full_name, email, phone FROM customers ORDER BY rowid
";

const SELECT_CUSTOMER: &str = r"
    SELECT id, full_name, email, phone FROM customers WHERE id = ?
";

const INSERT_PROPERTY: &str = r"
    INSERT INTO properties (id, name, address, description) VALUES (?, ?, ?, ?)
";

const SELECT_PROPERTIES: &str = r"
    SELECT id, name, address, description FROM properties ORDER BY rowid
";

const SELECT_PROPERTY: &str = r"
    SELECT id, name, address, description FROM properties WHERE id = ?
";

const INSERT_UNIT: &str = r"
    INSERT INTO units (id, property_id, name, capacity, price_per_night, amenities)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_UNITS: &str = r"
    SELECT id, property_id, name, capacity, price_per_night, amenities
    FROM units ORDER BY rowid
";

const SELECT_UNIT: &str = r"
    SELECT id, property_id, name, capacity, price_per_night, amenities
    FROM units WHERE id = ?
";

const INSERT_ADDON: &str = r"
    INSERT INTO addons (id, name, price, description) VALUES (?, ?, ?, ?)
";

const SELECT_ADDONS: &str = r"
    SELECT id, name, price, description FROM addons ORDER BY rowid
";

const INSERT_RATE_PLAN: &str = r"
    INSERT INTO rate_plans
    (id, unit_id, name, base_price, min_nights, max_nights, weekend_surcharge)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_RATE_PLANS: &str = r"
    SELECT id, unit_id, name, base_price, min_nights, max_nights, weekend_surcharge
    FROM rate_plans ORDER BY rowid
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (id, customer_id, unit_id, check_in, check_out, adults, children, status, addons, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET customer_id = ?, unit_id = ?, check_in = ?, check_out = ?,
        adults = ?, children = ?, status = ?, addons = ?, created_at = ?
    WHERE id = ?
";

const SELECT_RESERVATIONS: &str = r"
    SELECT id, customer_id, unit_id, check_in, check_out, adults, children, status, addons, created_at
    FROM reservations ORDER BY rowid
";

const SELECT_RESERVATION: &str = r"
    SELECT id, customer_id, unit_id, check_in, check_out, adults, children, status, addons, created_at
    FROM reservations WHERE id = ?
";

const INSERT_PAYMENT: &str = r"
    INSERT INTO payments
    (id, reservation_id, amount, currency, status, transaction_reference, paid_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const UPSERT_PAYMENT: &str = r"
    INSERT OR REPLACE INTO payments
    (id, reservation_id, amount, currency, status, transaction_reference, paid_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_PAYMENTS: &str = r"
    SELECT id, reservation_id, amount, currency, status, transaction_reference, paid_at
    FROM payments ORDER BY rowid
";

const SELECT_PAYMENT: &str = r"
    SELECT id, reservation_id, amount, currency, status, transaction_reference, paid_at
    FROM payments WHERE id = ?
";

const INSERT_WAITLIST_ENTRY: &str = r"
    INSERT INTO waitlist
    (id, unit_id, customer_id, desired_check_in, desired_check_out, created_at, notified)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_WAITLIST_ENTRIES: &str = r"
    SELECT id, unit_id, customer_id, desired_check_in, desired_check_out, created_at, notified
    FROM waitlist ORDER BY rowid
";

const INSERT_AUDIT_ENTRY: &str = r"
    INSERT INTO audit_log (id, event_type, payload, created_at) VALUES (?, ?, ?, ?)
";

const SELECT_AUDIT_LOG: &str = r"
    SELECT id, event_type, payload, created_at FROM audit_log ORDER BY rowid
";

const INSERT_INVENTORY_SNAPSHOT: &str = r"
    INSERT INTO inventory_snapshots (id, unit_id, date, is_available, generated_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_INVENTORY_SNAPSHOTS: &str = r"
    SELECT id, unit_id, date, is_available, generated_at
    FROM inventory_snapshots ORDER BY rowid
";

/// Encodes a date for storage.
fn encode_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Decodes a stored date.
fn decode_date(text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Encodes a timestamp for storage.
fn encode_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}

/// Decodes a stored timestamp.
fn decode_timestamp(text: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Encodes a JSON-serializable field for storage.
fn encode_json<T: serde::Serialize>(value: &T) -> rusqlite::Result<String> {
    serde_json::to_string(value).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Decodes a stored JSON field.
fn decode_json<T: serde::de::DeserializeOwned>(text: &str) -> rusqlite::Result<T> {
    serde_json::from_str(text).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn row_to_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        full_name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
    })
}

fn row_to_property(row: &rusqlite::Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        description: row.get(3)?,
    })
}

fn row_to_unit(row: &rusqlite::Row<'_>) -> rusqlite::Result<Unit> {
    let amenities: String = row.get(5)?;
    Ok(Unit {
        id: row.get(0)?,
        property_id: row.get(1)?,
        name: row.get(2)?,
        capacity: row.get(3)?,
        price_per_night: row.get(4)?,
        amenities: decode_json(&amenities)?,
    })
}

fn row_to_addon(row: &rusqlite::Row<'_>) -> rusqlite::Result<AddOn> {
    Ok(AddOn {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        description: row.get(3)?,
    })
}

fn row_to_rate_plan(row: &rusqlite::Row<'_>) -> rusqlite::Result<RatePlan> {
    Ok(RatePlan {
        id: row.get(0)?,
        unit_id: row.get(1)?,
        name: row.get(2)?,
        base_price: row.get(3)?,
        min_nights: row.get(4)?,
        max_nights: row.get(5)?,
        weekend_surcharge: row.get(6)?,
    })
}

fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let check_in: String = row.get(3)?;
    let check_out: String = row.get(4)?;
    let status: String = row.get(7)?;
    let addons: String = row.get(8)?;
    let created_at: String = row.get(9)?;

    Ok(Reservation {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        unit_id: row.get(2)?,
        check_in: decode_date(&check_in)?,
        check_out: decode_date(&check_out)?,
        adults: row.get(5)?,
        children: row.get(6)?,
        status: status
            .parse::<ReservationStatus>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
        addons: decode_json(&addons)?,
        created_at: decode_timestamp(&created_at)?,
    })
}

fn row_to_payment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Payment> {
    let status: String = row.get(4)?;
    let paid_at: Option<String> = row.get(6)?;

    Ok(Payment {
        id: row.get(0)?,
        reservation_id: row.get(1)?,
        amount: row.get(2)?,
        currency: row.get(3)?,
        status: status
            .parse::<PaymentStatus>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
        transaction_reference: row.get(5)?,
        paid_at: paid_at.as_deref().map(decode_timestamp).transpose()?,
    })
}

fn row_to_waitlist_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<WaitlistEntry> {
    let desired_check_in: String = row.get(3)?;
    let desired_check_out: String = row.get(4)?;
    let created_at: String = row.get(5)?;

    Ok(WaitlistEntry {
        id: row.get(0)?,
        unit_id: row.get(1)?,
        customer_id: row.get(2)?,
        desired_check_in: decode_date(&desired_check_in)?,
        desired_check_out: decode_date(&desired_check_out)?,
        created_at: decode_timestamp(&created_at)?,
        notified: row.get(6)?,
    })
}

fn row_to_audit_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<AuditLogEntry> {
    let payload: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(AuditLogEntry {
        id: row.get(0)?,
        event_type: row.get(1)?,
        payload: decode_json(&payload)?,
        created_at: decode_timestamp(&created_at)?,
    })
}

fn row_to_snapshot(row: &rusqlite::Row<'_>) -> rusqlite::Result<InventorySnapshot> {
    let date: String = row.get(2)?;
    let generated_at: String = row.get(4)?;

    Ok(InventorySnapshot {
        id: row.get(0)?,
        unit_id: row.get(1)?,
        date: decode_date(&date)?,
        is_available: row.get(3)?,
        generated_at: decode_timestamp(&generated_at)?,
    })
}

/// A [`RecordStore`] backed by a single SQLite database file.
///
/// Opened in WAL mode with a configurable busy timeout so that several
/// processes can share a store. The schema is created on first open and
/// version-checked afterwards.
///
/// # Examples
///
/// ```no_run
/// use lodge::{SqliteStore, StoreConfig};
///
/// let config = StoreConfig::new("/tmp/lodge.db");
/// let store = SqliteStore::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    #[allow(dead_code)]
    config: StoreConfig,
}

impl SqliteStore {
    /// Opens a store with the given configuration.
    ///
    /// Creates the parent directory and the database file when
    /// `auto_create` is enabled, applies the WAL and busy timeout
    /// pragmas, and initializes or verifies the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or created, if a
    /// pragma cannot be applied, or if the stored schema version does
    /// not match [`schema::CURRENT_SCHEMA_VERSION`].
    pub fn open(config: StoreConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row, so it needs query_row.
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        if !config.read_only {
            ensure_schema(&conn)?;
        }

        Ok(Self { conn, config })
    }

    fn query_all<T>(
        &self,
        sql: &str,
        f: impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], f)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn query_by_id<T>(
        &self,
        sql: &str,
        id: &str,
        f: impl FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Option<T>> {
        Ok(self.conn.query_row(sql, params![id], f).optional()?)
    }

    fn insert_payment_with(&mut self, sql: &str, payment: &Payment) -> Result<()> {
        self.conn.execute(
            sql,
            params![
                payment.id,
                payment.reservation_id,
                payment.amount,
                payment.currency,
                payment.status.as_str(),
                payment.transaction_reference,
                payment.paid_at.map(encode_timestamp),
            ],
        )?;
        Ok(())
    }
}

/// Creates missing tables and indexes and verifies the schema version.
fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(&format!(
        "{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};\n{};",
        schema::CREATE_METADATA_TABLE,
        schema::CREATE_CUSTOMERS_TABLE,
        schema::CREATE_PROPERTIES_TABLE,
        schema::CREATE_UNITS_TABLE,
        schema::CREATE_ADDONS_TABLE,
        schema::CREATE_RATE_PLANS_TABLE,
        schema::CREATE_RESERVATIONS_TABLE,
        schema::CREATE_PAYMENTS_TABLE,
        schema::CREATE_WAITLIST_TABLE,
        schema::CREATE_AUDIT_LOG_TABLE,
        schema::CREATE_INVENTORY_SNAPSHOTS_TABLE,
        schema::CREATE_RESERVATIONS_UNIT_INDEX,
        schema::CREATE_RATE_PLANS_UNIT_INDEX,
        schema::CREATE_PAYMENTS_RESERVATION_INDEX,
        schema::CREATE_WAITLIST_UNIT_INDEX,
    ))?;

    let stored: Option<String> = conn
        .query_row(schema::SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    match stored {
        None => {
            conn.execute(
                schema::INSERT_SCHEMA_VERSION,
                params![schema::CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            Ok(())
        }
        Some(version) if version == schema::CURRENT_SCHEMA_VERSION.to_string() => Ok(()),
        Some(version) => Err(Error::Validation {
            field: "schema_version".to_string(),
            message: format!(
                "store has schema version {version}, expected {}",
                schema::CURRENT_SCHEMA_VERSION
            ),
        }),
    }
}

impl RecordStore for SqliteStore {
    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.query_all(SELECT_CUSTOMERS, row_to_customer)
    }

    fn find_customer(&self, id: &str) -> Result<Option<Customer>> {
        self.query_by_id(SELECT_CUSTOMER, id, row_to_customer)
    }

    fn save_customer(&mut self, customer: &Customer) -> Result<()> {
        self.conn.execute(
            INSERT_CUSTOMER,
            params![customer.id, customer.full_name, customer.email, customer.phone],
        )?;
        Ok(())
    }

    fn list_properties(&self) -> Result<Vec<Property>> {
        self.query_all(SELECT_PROPERTIES, row_to_property)
    }

    fn find_property(&self, id: &str) -> Result<Option<Property>> {
        self.query_by_id(SELECT_PROPERTY, id, row_to_property)
    }

    fn save_property(&mut self, property: &Property) -> Result<()> {
        self.conn.execute(
            INSERT_PROPERTY,
            params![
                property.id,
                property.name,
                property.address,
                property.description,
            ],
        )?;
        Ok(())
    }

    fn list_units(&self) -> Result<Vec<Unit>> {
        self.query_all(SELECT_UNITS, row_to_unit)
    }

    fn find_unit(&self, id: &str) -> Result<Option<Unit>> {
        self.query_by_id(SELECT_UNIT, id, row_to_unit)
    }

    fn save_unit(&mut self, unit: &Unit) -> Result<()> {
        self.conn.execute(
            INSERT_UNIT,
            params![
                unit.id,
                unit.property_id,
                unit.name,
                unit.capacity,
                unit.price_per_night,
                encode_json(&unit.amenities)?,
            ],
        )?;
        Ok(())
    }

    fn list_addons(&self) -> Result<Vec<AddOn>> {
        self.query_all(SELECT_ADDONS, row_to_addon)
    }

    fn save_addon(&mut self, addon: &AddOn) -> Result<()> {
        self.conn.execute(
            INSERT_ADDON,
            params![addon.id, addon.name, addon.price, addon.description],
        )?;
        Ok(())
    }

    fn list_rate_plans(&self) -> Result<Vec<RatePlan>> {
        self.query_all(SELECT_RATE_PLANS, row_to_rate_plan)
    }

    fn save_rate_plan(&mut self, plan: &RatePlan) -> Result<()> {
        self.conn.execute(
            INSERT_RATE_PLAN,
            params![
                plan.id,
                plan.unit_id,
                plan.name,
                plan.base_price,
                plan.min_nights,
                plan.max_nights,
                plan.weekend_surcharge,
            ],
        )?;
        Ok(())
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        self.query_all(SELECT_RESERVATIONS, row_to_reservation)
    }

    fn find_reservation(&self, id: &str) -> Result<Option<Reservation>> {
        self.query_by_id(SELECT_RESERVATION, id, row_to_reservation)
    }

    fn save_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        self.conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.id,
                reservation.customer_id,
                reservation.unit_id,
                encode_date(reservation.check_in),
                encode_date(reservation.check_out),
                reservation.adults,
                reservation.children,
                reservation.status.as_str(),
                encode_json(&reservation.addons)?,
                encode_timestamp(reservation.created_at),
            ],
        )?;
        Ok(())
    }

    fn update_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let changed = self.conn.execute(
            UPDATE_RESERVATION,
            params![
                reservation.customer_id,
                reservation.unit_id,
                encode_date(reservation.check_in),
                encode_date(reservation.check_out),
                reservation.adults,
                reservation.children,
                reservation.status.as_str(),
                encode_json(&reservation.addons)?,
                encode_timestamp(reservation.created_at),
                reservation.id,
            ],
        )?;
        if changed == 0 {
            return Err(Error::NotFound {
                resource: format!("reservation {}", reservation.id),
            });
        }
        Ok(())
    }

    fn replace_reservations(&mut self, reservations: &[Reservation]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM reservations", [])?;
        for reservation in reservations {
            tx.execute(
                INSERT_RESERVATION,
                params![
                    reservation.id,
                    reservation.customer_id,
                    reservation.unit_id,
                    encode_date(reservation.check_in),
                    encode_date(reservation.check_out),
                    reservation.adults,
                    reservation.children,
                    reservation.status.as_str(),
                    encode_json(&reservation.addons)?,
                    encode_timestamp(reservation.created_at),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn list_payments(&self) -> Result<Vec<Payment>> {
        self.query_all(SELECT_PAYMENTS, row_to_payment)
    }

    fn find_payment(&self, id: &str) -> Result<Option<Payment>> {
        self.query_by_id(SELECT_PAYMENT, id, row_to_payment)
    }

    fn save_payment(&mut self, payment: &Payment) -> Result<()> {
        self.insert_payment_with(INSERT_PAYMENT, payment)
    }

    fn replace_payments(&mut self, payments: &[Payment]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM payments", [])?;
        for payment in payments {
            tx.execute(
                INSERT_PAYMENT,
                params![
                    payment.id,
                    payment.reservation_id,
                    payment.amount,
                    payment.currency,
                    payment.status.as_str(),
                    payment.transaction_reference,
                    payment.paid_at.map(encode_timestamp),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn upsert_payment(&mut self, payment: &Payment) -> Result<()> {
        self.insert_payment_with(UPSERT_PAYMENT, payment)
    }

    fn list_waitlist_entries(&self) -> Result<Vec<WaitlistEntry>> {
        self.query_all(SELECT_WAITLIST_ENTRIES, row_to_waitlist_entry)
    }

    fn save_waitlist_entry(&mut self, entry: &WaitlistEntry) -> Result<()> {
        self.conn.execute(
            INSERT_WAITLIST_ENTRY,
            params![
                entry.id,
                entry.unit_id,
                entry.customer_id,
                encode_date(entry.desired_check_in),
                encode_date(entry.desired_check_out),
                encode_timestamp(entry.created_at),
                entry.notified,
            ],
        )?;
        Ok(())
    }

    fn list_audit_log(&self) -> Result<Vec<AuditLogEntry>> {
        self.query_all(SELECT_AUDIT_LOG, row_to_audit_entry)
    }

    fn save_audit_entry(&mut self, entry: &AuditLogEntry) -> Result<()> {
        self.conn.execute(
            INSERT_AUDIT_ENTRY,
            params![
                entry.id,
                entry.event_type,
                encode_json(&entry.payload)?,
                encode_timestamp(entry.created_at),
            ],
        )?;
        Ok(())
    }

    fn list_inventory_snapshots(&self) -> Result<Vec<InventorySnapshot>> {
        self.query_all(SELECT_INVENTORY_SNAPSHOTS, row_to_snapshot)
    }

    fn save_inventory_snapshot(&mut self, snapshot: &InventorySnapshot) -> Result<()> {
        self.conn.execute(
            INSERT_INVENTORY_SNAPSHOT,
            params![
                snapshot.id,
                snapshot.unit_id,
                encode_date(snapshot.date),
                snapshot.is_available,
                encode_timestamp(snapshot.generated_at),
            ],
        )?;
        Ok(())
    }

    /// Runs `f` inside a single IMMEDIATE transaction.
    ///
    /// The write lock is taken up front, so a concurrent writer blocks
    /// until this unit commits or rolls back. `f` must only issue plain
    /// statements; methods that open their own transaction (the
    /// `replace_*` family) cannot be nested here.
    fn exclusive<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        match f(self) {
            Ok(value) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(value)
            }
            Err(e) => {
                // Best effort: the original error is the one to surface.
                let _ = self.conn.execute_batch("ROLLBACK");
                Err(e)
            }
        }
    }
}
