use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::StoreError;
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self, StoreError> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                // Default data directory: ~/.taskpad
                let home_dir = dirs::home_dir().ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "could not determine home directory",
                    )
                })?;
                home_dir.join(".taskpad")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        Ok(FileTaskRepository { file_path: path })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no backing file, starting empty");
            return Ok(Vec::new());
        }

        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let tasks: Vec<Task> =
            serde_json::from_reader(reader).map_err(|source| StoreError::Corrupt {
                path: self.file_path.clone(),
                source,
            })?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks).map_err(|source| {
            StoreError::Corrupt {
                path: self.file_path.clone(),
                source,
            }
        })?;
        writer.flush()?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_task(text: &str) -> Task {
        Task::new(
            text.to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Priority::Low,
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();
        let tasks = repo.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let mut tasks = vec![sample_task("Buy milk"), sample_task("Walk dog")];
        tasks[1].done = true;
        repo.save(&tasks).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_empty() {
        let dir = tempdir().unwrap();
        let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(repo.file_path(), "{not json").unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let dir = tempdir().unwrap();
        let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();
        // Valid JSON, but not a task list.
        fs::write(repo.file_path(), r#"{"task":"not a list"}"#).unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let repo = FileTaskRepository::new(Some(dir.path().to_path_buf())).unwrap();

        repo.save(&[sample_task("a"), sample_task("b")]).unwrap();
        repo.save(&[sample_task("c")]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "c");
    }
}
