//! Design pressure command
//!
//! Resolves `Kz`, `Kh`, `Ke` and the building geometry, then runs the
//! directional procedure for one surface or for every supported surface.

use serde::Serialize;
use tracing::{debug, info};
use xwind_asce722::parameters::ke;
use xwind_asce722::pressure::velocity::kz_for;
use xwind_asce722::procedure::{DirectionalProcedure, WindInput, WindLoadProcedure};
use xwind_asce722::CoefficientError;
use xwind_core::types::{EnclosureType, ExposureCategory, StructureFlexibility, SurfaceType};

use super::Context;
use crate::output::Table;
use crate::Result;

#[derive(Serialize)]
struct PressureRow {
    surface: SurfaceType,
    cp: f64,
    positive_internal: f64,
    negative_internal: f64,
}

/// Site and building inputs for the pressure command
pub struct Building {
    pub speed: f64,
    pub exposure: ExposureCategory,
    pub enclosure: EnclosureType,
    pub flexibility: StructureFlexibility,
    pub height: f64,
    pub length: f64,
    pub width: f64,
    pub angle: f64,
    /// Height on the windward wall; the mean roof height when `None`
    pub z: Option<f64>,
    pub kzt: f64,
    pub elevation: f64,
}

/// Run the pressure command
pub fn run(ctx: &Context, building: &Building, surface: Option<SurfaceType>) -> Result<()> {
    let z = building.z.unwrap_or(building.height);
    let input = WindInput {
        speed: building.speed,
        kz: kz_for(building.exposure, z)?,
        kh: kz_for(building.exposure, building.height)?,
        kzt: building.kzt,
        ke: ke(building.elevation),
        exposure: building.exposure,
        enclosure: building.enclosure,
        flexibility: building.flexibility,
        mean_roof_height: building.height,
        width: building.width,
        length: building.length,
        roof_angle: building.angle,
    };
    info!(
        speed = input.speed,
        exposure = %input.exposure,
        z,
        kz = input.kz,
        kh = input.kh,
        "design pressure"
    );

    let procedure = DirectionalProcedure;
    let mut rows = Vec::new();
    match surface {
        Some(surface) => {
            let p = procedure.calculate_pressure(&input, surface)?;
            rows.push(PressureRow {
                surface,
                cp: p.cp,
                positive_internal: p.positive_internal,
                negative_internal: p.negative_internal,
            });
        }
        None => {
            for surface in SurfaceType::ALL {
                match procedure.calculate_pressure(&input, surface) {
                    Ok(p) => rows.push(PressureRow {
                        surface,
                        cp: p.cp,
                        positive_internal: p.positive_internal,
                        negative_internal: p.negative_internal,
                    }),
                    Err(CoefficientError::Unsupported(reason)) => {
                        debug!(%surface, %reason, "surface skipped");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    let out = &ctx.output;
    let mut table = Table::new(&["surface", "Cp", "p +GCpi (psf)", "p -GCpi (psf)"]);
    for row in &rows {
        table.push(vec![
            row.surface.to_string(),
            out.number(row.cp),
            out.number(row.positive_internal),
            out.number(row.negative_internal),
        ]);
    }

    out.emit(&rows, &table)
}
