pub mod apply;
pub mod bridge;
pub mod csv_table;
pub mod merge;

pub use apply::apply_to_column;
pub use bridge::{cell_to_value, value_to_cell};
pub use csv_table::{read_csv_frame, write_csv_frame};
pub use merge::{MergeError, merge_on_index};
