// Services backing the dashboard state (durable preference storage)
pub mod storage;
