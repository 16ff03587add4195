use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use serde_json::{Map, Value};
use umya_spreadsheet::{reader, writer, XlsxError};

use crate::config::Config;
use crate::models::{hotel, room};

pub mod cells;

use cells::Cell;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("worksheet '{0}' not found")]
    MissingSheet(String),
}

/// Append-only tabular store for one entity type, backed by a single xlsx
/// file with a fixed header row.
///
/// Every write runs a full load/modify/save cycle under a per-file lock, so
/// concurrent appends cannot compute the same target row or interleave
/// saves. Reads take the same lock and never observe a half-written file.
pub struct SheetStore {
    path: PathBuf,
    sheet_name: String,
    columns: &'static [&'static str],
    lock: Mutex<()>,
}

impl SheetStore {
    pub fn new(
        path: impl Into<PathBuf>,
        sheet_name: &str,
        columns: &'static [&'static str],
    ) -> Self {
        SheetStore {
            path: path.into(),
            sheet_name: sheet_name.to_string(),
            columns,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with its header row if it does not exist.
    /// Idempotent; safe to call before every write.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        let _guard = self.acquire();
        self.init_if_absent()
    }

    /// Appends one record as the next free row. `row` holds the cell values
    /// in column order, excluding `created_at`, which the store stamps
    /// itself.
    pub fn append(&self, row: &[Cell]) -> Result<(), StoreError> {
        debug_assert_eq!(row.len(), self.columns.len() - 1);

        let _guard = self.acquire();
        self.init_if_absent()?;

        let mut book = reader::xlsx::read(&self.path)?;
        let sheet = book
            .get_sheet_by_name_mut(&self.sheet_name)
            .ok_or_else(|| StoreError::MissingSheet(self.sheet_name.clone()))?;

        let target_row = sheet.get_highest_row() + 1;
        for (idx, cell) in row.iter().enumerate() {
            let slot = sheet.get_cell_mut((idx as u32 + 1, target_row));
            match cell {
                Cell::Text(text) => {
                    slot.set_value(text.as_str());
                }
                Cell::Number(n) => {
                    slot.set_value_number(*n);
                }
                Cell::Bool(b) => {
                    slot.set_value_bool(*b);
                }
            }
        }

        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        sheet
            .get_cell_mut((self.columns.len() as u32, target_row))
            .set_value(stamp);

        writer::xlsx::write(&book, &self.path)?;
        Ok(())
    }

    /// Reads every data row in file order, keyed by the header row, with
    /// best-effort typing. An absent backing file yields an empty list.
    pub fn load_all(&self) -> Result<Vec<Map<String, Value>>, StoreError> {
        let _guard = self.acquire();
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let book = reader::xlsx::read(&self.path)?;
        let sheet = book
            .get_sheet_by_name(&self.sheet_name)
            .ok_or_else(|| StoreError::MissingSheet(self.sheet_name.clone()))?;

        let header: Vec<String> = (1..=self.columns.len() as u32)
            .map(|col| sheet.get_value((col, 1)))
            .collect();

        let mut records = Vec::new();
        for row in 2..=sheet.get_highest_row() {
            let mut record = Map::new();
            for (idx, field) in header.iter().enumerate() {
                let text = sheet.get_value((idx as u32 + 1, row));
                record.insert(field.clone(), cells::infer(&text));
            }
            records.push(record);
        }
        Ok(records)
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn init_if_absent(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or_else(|| StoreError::MissingSheet(self.sheet_name.clone()))?;
        sheet.set_name(self.sheet_name.as_str());
        for (idx, column) in self.columns.iter().enumerate() {
            sheet.get_cell_mut((idx as u32 + 1, 1u32)).set_value(*column);
        }

        writer::xlsx::write(&book, &self.path)?;
        log::info!("created backing file {}", self.path.display());
        Ok(())
    }
}

/// One store per entity type, shared across handlers as app data.
pub struct Stores {
    pub hotels: SheetStore,
    pub rooms: SheetStore,
}

impl Stores {
    pub fn new(config: &Config) -> Self {
        Stores {
            hotels: SheetStore::new(config.hotel_file.clone(), "Hotels", hotel::COLUMNS),
            rooms: SheetStore::new(config.room_file.clone(), "Rooms", room::COLUMNS),
        }
    }
}
