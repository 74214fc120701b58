mod handle;
mod manager;
mod types;

pub use handle::TaskHandle;
pub use manager::TaskManager;
pub use types::TaskResult;
