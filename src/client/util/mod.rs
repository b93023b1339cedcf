pub mod persist_order;
pub mod refetch;
