use tokio::task::JoinHandle;

/// Handle to a spawned network task. Dropping it does not cancel the task.
pub struct TaskHandle {
    join_handle: JoinHandle<()>,
}

impl TaskHandle {
    pub fn new(join_handle: JoinHandle<()>) -> Self {
        Self { join_handle }
    }

    /// Aborts the task; its result is never delivered.
    pub fn cancel(&self) {
        self.join_handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }
}
