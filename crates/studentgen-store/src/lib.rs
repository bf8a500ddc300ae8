//! libSQL storage for student records.
//!
//! The [`Storage`] struct wraps a local libSQL database holding a single
//! `student` table. Records are append-only: the store supports
//! create-if-absent, insert, and full-table scans, nothing else.

mod error;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use libsql::{params, Connection, Database, Row};

use studentgen_core::model::{NewStudent, StudentRecord};
use studentgen_core::traits::RecordStore;

pub use error::{Result, StoreError};

const CREATE_STUDENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    ID         INTEGER PRIMARY KEY,
    NAME       TEXT,
    AGE        INTEGER,
    MARKS      INTEGER,
    DEPARTMENT TEXT,
    HOBBY      TEXT,
    SPORT      TEXT
);
"#;

/// Primary storage handle wrapping a libSQL database.
pub struct Storage {
    #[allow(dead_code)]
    db: Database,
    conn: Connection,
    path: PathBuf,
}

impl Storage {
    /// Open or create a database at `path` and ensure the student table exists.
    pub async fn open(path: &Path) -> Result<Self> {
        let open_err = |message: String| StoreError::Open {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| open_err(e.to_string()))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| open_err(e.to_string()))?;
        let conn = db.connect().map_err(|e| open_err(e.to_string()))?;

        let storage = Self {
            db,
            conn,
            path: path.to_path_buf(),
        };
        storage.ensure_schema().await?;
        tracing::debug!(path = %storage.path.display(), "opened student store");
        Ok(storage)
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_STUDENT_TABLE).await?;
        Ok(())
    }

    /// Insert a profile and return the id SQLite assigned to it.
    pub async fn insert_student(&self, student: &NewStudent) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO student (NAME, AGE, MARKS, DEPARTMENT, HOBBY, SPORT)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    student.name.as_str(),
                    i64::from(student.age),
                    i64::from(student.marks),
                    student.department.as_str(),
                    student.hobbies.as_str(),
                    student.sport.as_str(),
                ],
            )
            .await?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %student.name, "inserted student");
        Ok(id)
    }

    /// All students ordered by id.
    pub async fn list_students(&self) -> Result<Vec<StudentRecord>> {
        let mut rows = self
            .conn
            .query(
                "SELECT ID, NAME, AGE, MARKS, DEPARTMENT, HOBBY, SPORT FROM student ORDER BY ID",
                params![],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_student(&row)?);
        }
        Ok(results)
    }

    /// Number of stored students.
    pub async fn count_students(&self) -> Result<u64> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM student", params![])
            .await?;
        match rows.next().await? {
            Some(row) => {
                let n = row.get::<i64>(0)?;
                Ok(u64::try_from(n).unwrap_or(0))
            }
            None => Ok(0),
        }
    }
}

/// Map a `SELECT ID, NAME, AGE, MARKS, DEPARTMENT, HOBBY, SPORT` row.
///
/// NULL text columns read as empty strings and NULL numbers as zero, since the
/// table schema does not forbid them.
fn row_to_student(row: &Row) -> Result<StudentRecord> {
    let id = row.get::<i64>(0)?;
    let number = |idx: i32, column: &str| -> Result<u32> {
        let value = row.get::<Option<i64>>(idx)?.unwrap_or(0);
        u32::try_from(value).map_err(|_| StoreError::InvalidRow {
            id,
            message: format!("{column} out of range: {value}"),
        })
    };
    let text = |idx: i32| -> Result<String> { Ok(row.get::<Option<String>>(idx)?.unwrap_or_default()) };

    Ok(StudentRecord {
        id,
        name: text(1)?,
        age: number(2, "AGE")?,
        marks: number(3, "MARKS")?,
        department: text(4)?,
        hobbies: text(5)?,
        sport: text(6)?,
    })
}

#[async_trait]
impl RecordStore for Storage {
    async fn insert(&self, student: &NewStudent) -> anyhow::Result<i64> {
        Ok(self.insert_student(student).await?)
    }

    async fn fetch_all(&self) -> anyhow::Result<Vec<StudentRecord>> {
        Ok(self.list_students().await?)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.count_students().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Storage::open(&dir.path().join("student.db"))
            .await
            .expect("open test db");
        (dir, storage)
    }

    fn student(name: &str, age: u32, marks: u32) -> NewStudent {
        NewStudent {
            name: name.into(),
            age,
            marks,
            department: "Computer Science".into(),
            hobbies: "Reading, Chess".into(),
            sport: "Football".into(),
        }
    }

    #[tokio::test]
    async fn open_creates_empty_table() {
        let (_dir, storage) = test_storage().await;
        assert_eq!(storage.count_students().await.unwrap(), 0);
        assert!(storage.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reopen_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("student.db");

        let s1 = Storage::open(&path).await.expect("first open");
        s1.insert_student(&student("Asha", 20, 80)).await.unwrap();
        drop(s1);

        let s2 = Storage::open(&path).await.expect("second open");
        assert_eq!(s2.count_students().await.unwrap(), 1);
        assert_eq!(s2.path(), path.as_path());
    }

    #[tokio::test]
    async fn ids_increase_in_insert_order() {
        let (_dir, storage) = test_storage().await;
        let a = storage.insert_student(&student("Asha", 20, 80)).await.unwrap();
        let b = storage.insert_student(&student("Ben", 22, 65)).await.unwrap();
        let c = storage.insert_student(&student("Cara", 24, 91)).await.unwrap();
        assert!(a < b && b < c);

        let rows = storage.list_students().await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Ben", "Cara"]);
        assert_eq!(rows[2].id, c);
    }

    #[tokio::test]
    async fn round_trips_all_fields() {
        let (_dir, storage) = test_storage().await;
        let new = NewStudent {
            name: "Unknown".into(),
            age: 0,
            marks: 0,
            department: "Unknown".into(),
            hobbies: String::new(),
            sport: String::new(),
        };
        let id = storage.insert_student(&new).await.unwrap();

        let rows = storage.list_students().await.unwrap();
        assert_eq!(rows, vec![StudentRecord::from_new(id, new)]);
    }

    #[tokio::test]
    async fn null_columns_read_as_defaults() {
        let (_dir, storage) = test_storage().await;
        storage
            .conn
            .execute("INSERT INTO student (NAME) VALUES (?1)", params!["Partial"])
            .await
            .unwrap();

        let rows = storage.list_students().await.unwrap();
        assert_eq!(rows[0].name, "Partial");
        assert_eq!(rows[0].age, 0);
        assert_eq!(rows[0].hobbies, "");
    }

    #[tokio::test]
    async fn negative_age_is_invalid_row() {
        let (_dir, storage) = test_storage().await;
        storage
            .conn
            .execute(
                "INSERT INTO student (NAME, AGE, MARKS) VALUES (?1, ?2, ?3)",
                params!["Odd", -3i64, 10i64],
            )
            .await
            .unwrap();

        let err = storage.list_students().await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidRow { .. }));
    }

    #[tokio::test]
    async fn record_store_trait() {
        let (_dir, storage) = test_storage().await;
        let store: &dyn RecordStore = &storage;
        let id = store.insert(&student("Dev", 19, 72)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.fetch_all().await.unwrap()[0].id, id);
    }
}
