// src/specs/dh_tables.rs
//! Scraping *spec* for the DH parameter tables.
//!
//! Row grammar, per `<tr>` (only `<td>` cells count):
//! - one cell: robot name heading; starts a fresh joint map and becomes current;
//! - first cell `Kinematics`: column sub-header, skipped;
//! - otherwise: `label | theta | r | d | alpha`, stored under the current robot.
//!
//! The current robot carries across table boundaries. Joint labels are not
//! checked here; a missing joint surfaces later in `kinematics::series`.

use log::{ debug, warn };

use crate::config::consts::SUBHEADER_LABEL;
use crate::core::html::{ blocks, cell_text };
use crate::data::{ RawJointParams, ScrapedDataset };
use crate::error::{ Error, Result };

/// Cell texts of one `<tr>`.
pub type Row = Vec<String>;
/// Rows of one `<table>`.
pub type Table = Vec<Row>;

/// Whole page → dataset.
pub fn parse_doc(html_doc: &str) -> Result<ScrapedDataset> {
    let tables: Vec<Table> = blocks(html_doc, "table").map(read_table).collect();
    debug!("DH tables: {} <table> blocks", tables.len());
    extract_dataset(&tables)
}

/// `<table>` block → rows of `<td>` texts.
pub fn read_table(table: &str) -> Table {
    blocks(table, "tr")
        .map(|tr| blocks(tr, "td").map(cell_text).collect())
        .collect()
}

/// Fold every row of every table into the dataset, in order.
pub fn extract_dataset(tables: &[Table]) -> Result<ScrapedDataset> {
    let acc = tables
        .iter()
        .flatten()
        .try_fold(Accumulator::default(), |acc, row| acc.push_row(row))?;
    Ok(acc.dataset)
}

#[derive(Default)]
struct Accumulator {
    dataset: ScrapedDataset,
    current: Option<String>,
}

impl Accumulator {
    fn push_row(mut self, row: &[String]) -> Result<Self> {
        match row {
            [] => debug!("DH tables: row without <td> cells skipped"),

            [name] => {
                let joints = self.dataset.entry(name.clone()).or_default();
                if !joints.is_empty() {
                    warn!("DH tables: heading `{name}` seen again, earlier rows dropped");
                    joints.clear();
                }
                self.current = Some(name.clone());
            }

            [first, ..] if first == SUBHEADER_LABEL => {}

            [label, theta, r, d, alpha, ..] => {
                let robot = self.current.as_ref().ok_or_else(|| Error::RowWithoutRobot {
                    label: label.clone(),
                })?;
                let params = RawJointParams {
                    theta: theta.clone(),
                    r: r.clone(),
                    d: d.clone(),
                    alpha: alpha.clone(),
                };
                self.dataset
                    .entry(robot.clone())
                    .or_default()
                    .insert(label.clone(), params);
            }

            [label, ..] => {
                return Err(Error::ShortRow {
                    robot: self.current.unwrap_or_default(),
                    label: label.clone(),
                    cells: row.len(),
                });
            }
        }
        Ok(self)
    }
}
