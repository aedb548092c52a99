//! Emergency and doctor contact database operations.

use rusqlite::{params, Row, ToSql};

use super::{Database, DbResult, OwnedRecord};
use crate::models::{DoctorContact, EmergencyContact};

impl OwnedRecord for EmergencyContact {
    const TABLE: &'static str = "emergency_contacts";
    const ID_COLUMN: &'static str = "contact_id";
    const COLUMNS: &'static [&'static str] = &[
        "contact_id",
        "owner_id",
        "name",
        "home_phone",
        "work_phone",
        "mobile_phone",
        "relation_type",
        "email",
        "created_at",
        "updated_at",
    ];
    const ORDER_BY: &'static str = "name, created_at";

    fn record_id(&self) -> &str {
        &self.contact_id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(EmergencyContact {
            contact_id: row.get(0)?,
            owner_id: row.get(1)?,
            name: row.get(2)?,
            home_phone: row.get(3)?,
            work_phone: row.get(4)?,
            mobile_phone: row.get(5)?,
            relation_type: row.get(6)?,
            email: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        params![
            self.contact_id,
            self.owner_id,
            self.name,
            self.home_phone,
            self.work_phone,
            self.mobile_phone,
            self.relation_type,
            self.email,
            self.created_at,
            self.updated_at,
        ]
        .to_vec()
    }
}

impl OwnedRecord for DoctorContact {
    const TABLE: &'static str = "doctor_contacts";
    const ID_COLUMN: &'static str = "contact_id";
    const COLUMNS: &'static [&'static str] = &[
        "contact_id",
        "owner_id",
        "contact_type",
        "name",
        "address",
        "telephone",
        "email",
        "created_at",
        "updated_at",
    ];
    const ORDER_BY: &'static str = "contact_type, name";

    fn record_id(&self) -> &str {
        &self.contact_id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(DoctorContact {
            contact_id: row.get(0)?,
            owner_id: row.get(1)?,
            contact_type: row.get(2)?,
            name: row.get(3)?,
            address: row.get(4)?,
            telephone: row.get(5)?,
            email: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        params![
            self.contact_id,
            self.owner_id,
            self.contact_type,
            self.name,
            self.address,
            self.telephone,
            self.email,
            self.created_at,
            self.updated_at,
        ]
        .to_vec()
    }
}

impl Database {
    /// Update an existing emergency contact, scoped to its owner.
    pub fn update_emergency_contact(&self, contact: &EmergencyContact) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE emergency_contacts SET
                name = ?3,
                home_phone = ?4,
                work_phone = ?5,
                mobile_phone = ?6,
                relation_type = ?7,
                email = ?8,
                updated_at = ?9
            WHERE contact_id = ?1 AND owner_id = ?2
            "#,
            params![
                contact.contact_id,
                contact.owner_id,
                contact.name,
                contact.home_phone,
                contact.work_phone,
                contact.mobile_phone,
                contact.relation_type,
                contact.email,
                contact.updated_at,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Update an existing doctor contact, scoped to its owner.
    pub fn update_doctor_contact(&self, contact: &DoctorContact) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE doctor_contacts SET
                contact_type = ?3,
                name = ?4,
                address = ?5,
                telephone = ?6,
                email = ?7,
                updated_at = ?8
            WHERE contact_id = ?1 AND owner_id = ?2
            "#,
            params![
                contact.contact_id,
                contact.owner_id,
                contact.contact_type,
                contact.name,
                contact.address,
                contact.telephone,
                contact.email,
                contact.updated_at,
            ],
        )?;
        Ok(rows_affected > 0)
    }
}
