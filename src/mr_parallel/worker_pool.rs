use std::any::Any;
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

use async_channel::{Receiver, Sender};
use tracing::debug;

use crate::common::{map_line, MapReduceApp, Task};
use crate::count_table::CountTable;
use crate::error::WordCountError;

pub struct WorkerPool {
    pub workers: Vec<Worker>,
    sender: Sender<Task>,
}

impl WorkerPool {
    pub fn new(size: usize, app: Arc<dyn MapReduceApp>) -> WorkerPool {
        assert!(size > 0);

        // one queued partition per worker keeps the reader from running ahead
        let (sender, receiver) = async_channel::bounded(size);
        let mut workers = Vec::with_capacity(size);

        for _ in 0..size {
            workers.push(Worker::new(receiver.clone(), Arc::clone(&app)));
        }

        WorkerPool { workers, sender }
    }

    /// Blocks until a worker has room for the task.
    pub fn run_task(&self, task: Task) -> Result<(), WordCountError> {
        self.sender
            .send_blocking(task)
            .map_err(|_| WordCountError::ChannelClosed)
    }

    /// Closes the queue, lets the workers drain it, and returns their partial tables.
    pub fn finish(self) -> Result<Vec<CountTable>, WordCountError> {
        self.sender.close();
        self.workers.into_iter().map(Worker::join).collect()
    }
}

pub struct Worker {
    pub id: String,
    thread: thread::JoinHandle<CountTable>,
}

impl Worker {
    pub fn new(receiver: Receiver<Task>, app: Arc<dyn MapReduceApp>) -> Worker {
        let id = Uuid::new_v4().to_string();
        let id_clone = id.clone();
        let thread = thread::spawn(move || {
            let mut table = CountTable::new();
            while let Ok(task) = receiver.recv_blocking() {
                match task {
                    Task::Map(partition, lines) => {
                        debug!(worker = %id_clone, partition, lines = lines.len(), "map partition");
                        for line in &lines {
                            map_line(app.as_ref(), line, &mut table);
                        }
                    }
                }
            }
            debug!(worker = %id_clone, distinct = table.len(), "worker drained");
            table
        });

        Worker { id, thread }
    }

    fn join(self) -> Result<CountTable, WordCountError> {
        let id = self.id;
        self.thread.join().map_err(|payload| WordCountError::Worker {
            id,
            reason: panic_message(payload.as_ref()),
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panicked".to_string()
    }
}
