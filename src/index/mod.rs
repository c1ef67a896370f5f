pub mod inverted;
pub mod posting;
pub mod probe_table;
