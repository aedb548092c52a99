//! Medication table mapping.

use rusqlite::{params, Row, ToSql};

use super::OwnedRecord;
use crate::models::Medication;

impl OwnedRecord for Medication {
    const TABLE: &'static str = "medications";
    const ID_COLUMN: &'static str = "medication_id";
    const COLUMNS: &'static [&'static str] = &[
        "medication_id",
        "owner_id",
        "medication_name",
        "dosage",
        "frequency",
        "created_at",
    ];
    const ORDER_BY: &'static str = "created_at, medication_name";

    fn record_id(&self) -> &str {
        &self.medication_id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Medication {
            medication_id: row.get(0)?,
            owner_id: row.get(1)?,
            medication_name: row.get(2)?,
            dosage: row.get(3)?,
            frequency: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        params![
            self.medication_id,
            self.owner_id,
            self.medication_name,
            self.dosage,
            self.frequency,
            self.created_at,
        ]
        .to_vec()
    }
}
