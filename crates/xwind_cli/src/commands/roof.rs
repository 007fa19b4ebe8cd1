//! Roof coefficient commands
//!
//! Windward and leeward slopes with wind normal to the ridge, and the
//! roof zones with wind parallel to the ridge.

use serde::Serialize;
use tracing::info;
use xwind_asce722::pressure::domain_clamps;
use xwind_asce722::pressure::roof::{
    leeward_cp_with_factor, parallel_to_ridge, windward_roof_cp_with_factor,
};
use xwind_asce722::tables::roof::{LEEWARD_CP, WINDWARD_CP};

use super::Context;
use crate::output::Table;
use crate::Result;

#[derive(Serialize)]
struct WindwardReport {
    h_over_l: f64,
    angle: f64,
    plan_area: Option<f64>,
    cp1: f64,
    cp2: f64,
    reduction_factor: Option<f64>,
}

#[derive(Serialize)]
struct LeewardReport {
    h_over_l: f64,
    angle: f64,
    plan_area: Option<f64>,
    cp: f64,
    reduction_factor: Option<f64>,
}

/// Run the windward command
pub fn windward(ctx: &Context, length: f64, height: f64, angle: f64, area: Option<f64>) -> Result<()> {
    info!(length, height, angle, ?area, "windward roof coefficients");

    let (cp, reduction_factor) = windward_roof_cp_with_factor(length, height, angle, area)?;
    let h_over_l = height / length;
    ctx.warn_clamps(domain_clamps(&WINDWARD_CP, h_over_l, angle));

    let out = &ctx.output;
    let mut table = Table::new(&["h/L", "angle", "Cp1", "Cp2", "reduction"]);
    table.push(vec![
        out.number(h_over_l),
        out.number(angle),
        out.number(cp.cp1),
        out.number(cp.cp2),
        out.optional(reduction_factor),
    ]);

    let report = WindwardReport {
        h_over_l,
        angle,
        plan_area: area,
        cp1: cp.cp1,
        cp2: cp.cp2,
        reduction_factor,
    };
    out.emit(&report, &table)
}

/// Run the leeward command
pub fn leeward(ctx: &Context, h_over_l: f64, angle: f64, area: Option<f64>) -> Result<()> {
    info!(h_over_l, angle, ?area, "leeward roof coefficient");

    let (cp, reduction_factor) = leeward_cp_with_factor(h_over_l, angle, area)?;
    ctx.warn_clamps(domain_clamps(&LEEWARD_CP, h_over_l, angle));

    let out = &ctx.output;
    let mut table = Table::new(&["h/L", "angle", "Cp", "reduction"]);
    table.push(vec![
        out.number(h_over_l),
        out.number(angle),
        out.number(cp),
        out.optional(reduction_factor),
    ]);

    let report = LeewardReport {
        h_over_l,
        angle,
        plan_area: area,
        cp,
        reduction_factor,
    };
    out.emit(&report, &table)
}

/// Run the parallel command
pub fn parallel(ctx: &Context, h_over_l: f64, area: Option<f64>) -> Result<()> {
    info!(h_over_l, ?area, "parallel-to-ridge zone coefficients");

    let zones = parallel_to_ridge(h_over_l, area)?;

    let out = &ctx.output;
    let mut table = Table::new(&["zone", "Cp1", "Cp2", "reduction"]);
    for zone in &zones {
        table.push(vec![
            zone.zone.to_string(),
            out.number(zone.cp1),
            out.number(zone.cp2),
            out.optional(zone.reduction_factor),
        ]);
    }

    out.emit(&zones, &table)
}
