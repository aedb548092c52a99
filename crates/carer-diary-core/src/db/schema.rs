//! SQLite schema definition.

/// Complete database schema for the carer diary.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Users
-- ============================================================================

CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,                  -- Argon2id PHC string
    address TEXT NOT NULL,
    phone TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Medications
-- ============================================================================

CREATE TABLE IF NOT EXISTS medications (
    medication_id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL REFERENCES users(user_id),
    medication_name TEXT NOT NULL,
    dosage TEXT NOT NULL,                         -- e.g. "5 mg"
    frequency TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_medications_owner ON medications(owner_id);

-- ============================================================================
-- Diary Entries (falls, medical issues, GP / hospital / dentist visits)
-- ============================================================================

CREATE TABLE IF NOT EXISTS diary_entries (
    entry_id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL REFERENCES users(user_id),
    category TEXT NOT NULL CHECK (category IN (
        'fall', 'medical_issue', 'gp_visit', 'hospital_visit', 'dentist_visit'
    )),
    date TEXT NOT NULL,                           -- YYYY-MM-DD
    time TEXT NOT NULL,
    description TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Upcoming-visit lookups filter on all three columns
CREATE INDEX IF NOT EXISTS idx_diary_owner_category_date
    ON diary_entries(owner_id, category, date);

-- ============================================================================
-- Contacts
-- ============================================================================

CREATE TABLE IF NOT EXISTS emergency_contacts (
    contact_id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL REFERENCES users(user_id),
    name TEXT NOT NULL,
    home_phone TEXT,
    work_phone TEXT,
    mobile_phone TEXT,
    relation_type TEXT,
    email TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_emergency_contacts_owner ON emergency_contacts(owner_id);

CREATE TABLE IF NOT EXISTS doctor_contacts (
    contact_id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL REFERENCES users(user_id),
    contact_type TEXT NOT NULL,
    name TEXT NOT NULL,
    address TEXT,
    telephone TEXT NOT NULL,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_doctor_contacts_owner ON doctor_contacts(owner_id);

-- ============================================================================
-- Medication Collection Reminder (at most one per user)
-- ============================================================================

CREATE TABLE IF NOT EXISTS reminders (
    owner_id TEXT PRIMARY KEY REFERENCES users(user_id),
    initial_date TEXT NOT NULL,                   -- YYYY-MM-DD
    frequency_weeks INTEGER NOT NULL CHECK (frequency_weeks > 0),
    next_collection_date TEXT NOT NULL,           -- initial_date + 7 * frequency_weeks
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
