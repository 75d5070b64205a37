use redb::{Database, ReadableTable, TableDefinition};
use std::sync::Arc;

use crate::sort_directive::SortDirective;
use crate::task::Task;

const TASKS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("tasks");
const SEQUENCES_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequences");

const TASK_ID_SEQUENCE: &str = "task_id";

#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    pub fn new(path: &str) -> Result<Self, redb::Error> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        let _ = write_txn.open_table(TASKS_TABLE)?;
        let _ = write_txn.open_table(SEQUENCES_TABLE)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    /// Persists a new task, assigning the next id from the task sequence.
    /// The sequence only moves forward, so ids of deleted tasks are never
    /// reused.
    pub fn create_task(
        &self,
        title: String,
        description: Option<String>,
    ) -> Result<Task, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let task;
        {
            let mut sequences_table = write_txn.open_table(SEQUENCES_TABLE)?;
            let id = match sequences_table.get(TASK_ID_SEQUENCE)? {
                Some(last) => last.value() + 1,
                None => 1,
            };
            sequences_table.insert(TASK_ID_SEQUENCE, id)?;

            task = Task {
                id,
                title,
                description,
                completed_at: None,
            };

            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let task_bytes = serde_json::to_vec(&task).unwrap();
            tasks_table.insert(task.id, task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(task)
    }

    pub fn get_task(&self, id: u64) -> Result<Option<Task>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;
        match tasks_table.get(id)? {
            Some(data) => {
                let task: Task = serde_json::from_slice(data.value()).unwrap();
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Lists tasks, optionally restricted to titles containing `title_query`
    /// (case-insensitive substring) and ordered by `sort`. Without a sort
    /// directive the natural order is id ascending, which is insertion order
    /// since the key space is the id sequence.
    pub fn list_tasks(
        &self,
        title_query: Option<&str>,
        sort: Option<SortDirective>,
    ) -> Result<Vec<Task>, redb::Error> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let needle = title_query.map(|q| q.to_lowercase());
        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            let task: Task = serde_json::from_slice(value.value()).unwrap();
            if let Some(needle) = &needle {
                if !task.title.to_lowercase().contains(needle) {
                    continue;
                }
            }
            tasks.push(task);
        }

        if let Some(sort) = sort {
            sort.apply(&mut tasks);
        }
        Ok(tasks)
    }

    pub fn update_task(&self, task: &Task) -> Result<(), redb::Error> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let task_bytes = serde_json::to_vec(task).unwrap();
            tasks_table.insert(task.id, task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn delete_task(&self, id: u64) -> Result<bool, redb::Error> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let result = tasks_table.remove(id)?;
            deleted = result.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn open_context() -> (DataContext, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.redb");
        let ctx = DataContext::new(path.to_str().unwrap()).unwrap();
        (ctx, dir)
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let (ctx, _dir) = open_context();
        let a = ctx.create_task("first".to_string(), None).unwrap();
        let b = ctx.create_task("second".to_string(), None).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let (ctx, _dir) = open_context();
        let a = ctx.create_task("first".to_string(), None).unwrap();
        assert!(ctx.delete_task(a.id).unwrap());
        let b = ctx.create_task("second".to_string(), None).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn get_missing_task_is_none() {
        let (ctx, _dir) = open_context();
        assert!(ctx.get_task(42).unwrap().is_none());
    }

    #[test]
    fn delete_missing_task_is_false() {
        let (ctx, _dir) = open_context();
        assert!(!ctx.delete_task(42).unwrap());
    }

    #[test]
    fn title_filter_is_case_insensitive_substring() {
        let (ctx, _dir) = open_context();
        ctx.create_task("Wash dishes".to_string(), None).unwrap();
        ctx.create_task("wash the car".to_string(), None).unwrap();
        ctx.create_task("Buy milk".to_string(), None).unwrap();

        let tasks = ctx.list_tasks(Some("WASH"), None).unwrap();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Wash dishes", "wash the car"]);
    }

    #[test]
    fn natural_order_is_insertion_order() {
        let (ctx, _dir) = open_context();
        ctx.create_task("zebra".to_string(), None).unwrap();
        ctx.create_task("apple".to_string(), None).unwrap();

        let tasks = ctx.list_tasks(None, None).unwrap();
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn update_preserves_id_and_completion() {
        let (ctx, _dir) = open_context();
        let mut task = ctx.create_task("draft".to_string(), None).unwrap();
        task.completed_at = Some(Utc::now());
        ctx.update_task(&task).unwrap();

        let mut loaded = ctx.get_task(task.id).unwrap().unwrap();
        assert!(loaded.is_complete());

        loaded.title = "final".to_string();
        ctx.update_task(&loaded).unwrap();

        let reloaded = ctx.get_task(task.id).unwrap().unwrap();
        assert_eq!(reloaded.id, task.id);
        assert_eq!(reloaded.title, "final");
        assert_eq!(reloaded.completed_at, task.completed_at);
    }
}
