use crate::error::StoreError;
use crate::model::task::Task;

pub trait TaskRepository {
    /// Reads the full task list. An absent backing file is an empty
    /// list; a present but unparseable one is `StoreError::Corrupt`.
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    /// Overwrites the backing file with the full list. Last writer
    /// wins; there is no locking or atomic rename.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
