//! Velocity pressure command
//!
//! Prints `Kz` and `qz` at one height, or over a range of heights.

use serde::Serialize;
use tracing::info;
use xwind_asce722::pressure::velocity::{kz_for, kz_series, qz_series};
use xwind_core::types::ExposureCategory;

use super::Context;
use crate::output::Table;
use crate::Result;

#[derive(Serialize)]
struct VelocityRow {
    z: f64,
    kz: f64,
    qz: f64,
}

/// Heights to evaluate: a single `z`, or `z..=z_end` every `z_step`
pub struct Heights {
    pub z: f64,
    pub z_end: Option<f64>,
    pub z_step: f64,
}

/// Run the velocity command
pub fn run(
    ctx: &Context,
    speed: f64,
    exposure: ExposureCategory,
    heights: Heights,
    kzt: f64,
    ke: f64,
) -> Result<()> {
    info!(speed, %exposure, z = heights.z, z_end = ?heights.z_end, kzt, ke, "velocity pressure");

    let samples = match heights.z_end {
        Some(z_end) => kz_series(exposure, heights.z, z_end, heights.z_step)?,
        None => vec![(heights.z, kz_for(exposure, heights.z)?)],
    };
    let kzs: Vec<f64> = samples.iter().map(|(_, k)| *k).collect();
    let qzs = qz_series(speed, &kzs, kzt, ke);

    let rows: Vec<VelocityRow> = samples
        .iter()
        .zip(qzs)
        .map(|(&(z, kz), qz)| VelocityRow { z, kz, qz })
        .collect();

    let out = &ctx.output;
    let mut table = Table::new(&["z (ft)", "Kz", "qz (psf)"]);
    for row in &rows {
        table.push(vec![out.number(row.z), out.number(row.kz), out.number(row.qz)]);
    }

    out.emit(&rows, &table)
}
