//! Wall coefficient command

use serde::Serialize;
use tracing::info;
use xwind_asce722::pressure::wall::wall_cp;
use xwind_core::types::SurfaceType;

use super::Context;
use crate::output::Table;
use crate::Result;

#[derive(Serialize)]
struct WallReport {
    surface: SurfaceType,
    l_over_b: f64,
    cp: f64,
}

/// Run the wall command
pub fn run(ctx: &Context, length: f64, width: f64, surface: SurfaceType) -> Result<()> {
    info!(length, width, %surface, "wall coefficient");

    let cp = wall_cp(length, width, surface)?;
    let l_over_b = length / width;

    let out = &ctx.output;
    let mut table = Table::new(&["surface", "L/B", "Cp"]);
    table.push(vec![surface.to_string(), out.number(l_over_b), out.number(cp)]);

    out.emit(
        &WallReport {
            surface,
            l_over_b,
            cp,
        },
        &table,
    )
}
