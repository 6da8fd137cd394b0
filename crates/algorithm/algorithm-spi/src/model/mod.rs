//! Model description types shared by algorithm implementations

mod order;

pub use order::{ArimaOrder, SeasonalOrder};
