//! Q-table persistence in NumPy `.npy` format
//!
//! Tables are stored as a single little-endian `f64` array in C order with
//! shape `(num_states, num_actions)`, readable by `numpy.load`.

use std::path::Path;

use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};
use sarsa_rl_core::{QTable, Result};

/// Default relative path of the saved table
pub const DEFAULT_Q_TABLE_PATH: &str = "./q_table.npy";

/// Write the whole table to `path`, overwriting any existing file
pub fn write_table(path: &Path, table: &QTable) -> Result<()> {
    write_npy(path, table.as_array())?;
    Ok(())
}

/// Read a table previously written by [`write_table`]
pub fn read_table(path: &Path) -> Result<Array2<f64>> {
    Ok(read_npy(path)?)
}
