//! # Conveyor Calculation
//!
//! Belt conveyor capacity, power, tension and pulley sizing following the
//! CEMA analytical method: a single pure transformation from a
//! [`ConveyorInput`] to a [`ConveyorResult`].
//!
//! The pipeline is decomposed into seven stage functions, executed in
//! sequence over one immutable input:
//!
//! 1. [`resolve_geometry`] - incline angle and sloped length
//! 2. [`evaluate_capacity`] - volumetric/mass throughput vs. target
//! 3. [`derive_masses`] - per-metre masses of material, belt and idlers
//! 4. [`aggregate_resistances`] - every motion-opposing force, summed to Te
//! 5. [`convert_power`] - Te to shaft and installed motor power
//! 6. [`solve_tensions`] - capstan slip limit, sag limit, T1..T4 map
//! 7. [`size_pulley`] - drive pulley torque and resultant bearing load
//!
//! Stages 5 and 6 both consume Te and are mutually independent; stage 7
//! consumes stage 6's tension pair. [`calculate`] validates the input and
//! runs all seven.
//!
//! ## Example
//!
//! ```rust
//! use conveyor_core::calculations::conveyor::{calculate, ConveyorInput};
//!
//! let input = ConveyorInput::example();
//! let result = calculate(&input).unwrap();
//! assert!(result.tension.t1_n > result.tension.t2_n);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::CalcConstants;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Meters, Millimeters, Radians};

// ============================================================================
// Input
// ============================================================================

/// Drive pulley arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DriveConfig {
    #[default]
    Head,
    Tail,
    #[serde(rename = "Dual Head")]
    DualHead,
    #[serde(rename = "Dual Tail")]
    DualTail,
}

/// Overall conveying direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConveyorDirection {
    #[default]
    Incline,
    Decline,
    Horizontal,
    Reversible,
}

/// Input parameters for one conveyor calculation.
///
/// All lengths in metres unless suffixed otherwise, belt width in mm,
/// capacity in t/h, speed in m/s, angles in degrees. Accessory fields are
/// optional; absent means the accessory is not fitted.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "CV-101",
///   "drive_config": "Head",
///   "conveyor_direction": "Incline",
///   "design_capacity_tph": 400.0,
///   "belt_speed_m_s": 1.5,
///   "wrap_angle_deg": 210.0,
///   "material_name": "Bituminous Coal",
///   "material_density_kg_m3": 800.0,
///   "lump_size_mm": 50.0,
///   "surcharge_angle_deg": 20.0,
///   "repose_angle_deg": 35.0,
///   "material_condition": "Dry",
///   "horizontal_length_m": 250.0,
///   "lift_height_m": 12.0,
///   "carrier_pitch_m": 1.2,
///   "return_pitch_m": 3.0,
///   "trough_angle_deg": 35.0,
///   "belt_width_mm": 800.0,
///   "belt_mass_kg_m": 10.5,
///   "idler_mass_kg_m": 14.0,
///   "belt_sag_percent": 2.0,
///   "friction_idlers": 0.02,
///   "drive_efficiency": 0.95
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConveyorInput {
    /// User label for this conveyor (e.g., "CV-101")
    pub label: String,

    // --- Design targets ---
    /// Drive pulley arrangement
    pub drive_config: DriveConfig,

    /// Conveying direction
    pub conveyor_direction: ConveyorDirection,

    /// Target design capacity (t/h)
    pub design_capacity_tph: f64,

    /// Belt speed (m/s)
    pub belt_speed_m_s: f64,

    /// Belt wrap on the drive pulley (deg), exclusive of 0 and 360
    pub wrap_angle_deg: f64,

    // --- Material ---
    /// Bulk material name (see [`crate::materials`])
    pub material_name: String,

    /// Loose bulk density (kg/m³)
    pub material_density_kg_m3: f64,

    /// Maximum lump size (mm)
    pub lump_size_mm: f64,

    /// Surcharge angle on the moving belt (deg)
    pub surcharge_angle_deg: f64,

    /// Angle of repose (deg)
    pub repose_angle_deg: f64,

    /// Condition tag (e.g., "Dry", "Wet and sticky")
    pub material_condition: String,

    // --- Geometry ---
    /// Horizontal centre distance (m)
    pub horizontal_length_m: f64,

    /// Lift height (m), negative for declines
    pub lift_height_m: f64,

    /// Carrier idler pitch (m)
    pub carrier_pitch_m: f64,

    /// Return idler pitch (m)
    pub return_pitch_m: f64,

    /// Trough angle of the carrier idler set (deg)
    pub trough_angle_deg: f64,

    // --- Belt & components ---
    /// Belt width (mm)
    pub belt_width_mm: f64,

    /// Belt mass per metre (kg/m)
    pub belt_mass_kg_m: f64,

    /// Carrier idler rotating mass per metre of conveyor (kg/m)
    pub idler_mass_kg_m: f64,

    /// Return idler rotating mass per metre (kg/m); defaults to 0.4 × carrier
    #[serde(default)]
    pub return_idler_mass_kg_m: Option<f64>,

    /// Allowable belt sag between carrier idlers (% of pitch)
    pub belt_sag_percent: f64,

    /// Idler rolling friction coefficient f (typ. 0.02 - 0.03)
    pub friction_idlers: f64,

    /// Drive efficiency, in (0, 1]
    pub drive_efficiency: f64,

    // --- Accessories ---
    /// Loading hopper height (m), if fitted
    #[serde(default)]
    pub hopper_height_m: Option<f64>,

    /// Hopper bottom opening width (m)
    #[serde(default)]
    pub hopper_width_m: Option<f64>,

    /// Hopper bottom opening length (m)
    #[serde(default)]
    pub hopper_length_m: Option<f64>,

    /// Skirtboard length past the loading point (m)
    #[serde(default)]
    pub skirt_length_m: Option<f64>,

    /// Skirtboard spacing (m), usually 2/3 of belt width
    #[serde(default)]
    pub skirt_width_m: Option<f64>,

    /// Number of travelling trippers
    #[serde(default)]
    pub tripper_count: Option<u32>,

    /// Number of belt scrapers
    #[serde(default)]
    pub scraper_count: Option<u32>,

    /// Number of discharge ploughs
    #[serde(default)]
    pub plough_count: Option<u32>,
}

impl ConveyorInput {
    /// Validate input parameters.
    ///
    /// The numeric pipeline itself is total arithmetic and does not guard
    /// against degenerate geometry; this gate keeps zero length, zero speed,
    /// a slipping-by-definition wrap angle and out-of-range efficiency from
    /// propagating NaN or infinity into the result.
    pub fn validate(&self) -> CalcResult<()> {
        if self.horizontal_length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "horizontal_length_m",
                self.horizontal_length_m.to_string(),
                "Horizontal length must be positive",
            ));
        }
        if self.belt_speed_m_s <= 0.0 {
            return Err(CalcError::invalid_input(
                "belt_speed_m_s",
                self.belt_speed_m_s.to_string(),
                "Belt speed must be positive",
            ));
        }
        if self.wrap_angle_deg <= 0.0 || self.wrap_angle_deg >= 360.0 {
            return Err(CalcError::invalid_input(
                "wrap_angle_deg",
                self.wrap_angle_deg.to_string(),
                "Wrap angle must be strictly between 0 and 360 degrees",
            ));
        }
        if self.drive_efficiency <= 0.0 || self.drive_efficiency > 1.0 {
            return Err(CalcError::invalid_input(
                "drive_efficiency",
                self.drive_efficiency.to_string(),
                "Drive efficiency must be in (0, 1]",
            ));
        }
        if self.friction_idlers < 0.0 {
            return Err(CalcError::invalid_input(
                "friction_idlers",
                self.friction_idlers.to_string(),
                "Idler friction coefficient cannot be negative",
            ));
        }
        if self.design_capacity_tph < 0.0 {
            return Err(CalcError::invalid_input(
                "design_capacity_tph",
                self.design_capacity_tph.to_string(),
                "Design capacity cannot be negative",
            ));
        }
        if self.material_density_kg_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "material_density_kg_m3",
                self.material_density_kg_m3.to_string(),
                "Density cannot be negative",
            ));
        }
        if self.belt_width_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "belt_width_mm",
                self.belt_width_mm.to_string(),
                "Belt width cannot be negative",
            ));
        }
        if self.belt_mass_kg_m < 0.0 || self.idler_mass_kg_m < 0.0 {
            return Err(CalcError::invalid_input(
                "belt_mass_kg_m",
                format!("{}/{}", self.belt_mass_kg_m, self.idler_mass_kg_m),
                "Belt and idler masses cannot be negative",
            ));
        }
        if let Some(wri) = self.return_idler_mass_kg_m {
            if wri < 0.0 {
                return Err(CalcError::invalid_input(
                    "return_idler_mass_kg_m",
                    wri.to_string(),
                    "Return idler mass cannot be negative",
                ));
            }
        }
        if self.carrier_pitch_m < 0.0 || self.return_pitch_m < 0.0 {
            return Err(CalcError::invalid_input(
                "carrier_pitch_m",
                format!("{}/{}", self.carrier_pitch_m, self.return_pitch_m),
                "Idler pitches cannot be negative",
            ));
        }
        if self.belt_sag_percent <= 0.0 {
            return Err(CalcError::invalid_input(
                "belt_sag_percent",
                self.belt_sag_percent.to_string(),
                "Belt sag allowance must be positive",
            ));
        }
        Ok(())
    }

    /// Belt width in metres
    pub fn belt_width_m(&self) -> Meters {
        Millimeters(self.belt_width_mm).into()
    }

    /// Drive wrap angle in radians
    pub fn wrap_angle_rad(&self) -> Radians {
        Degrees(self.wrap_angle_deg).into()
    }

    /// A representative head-drive incline conveyor, used in doctests and
    /// the CLI demo.
    pub fn example() -> Self {
        ConveyorInput {
            label: "CV-101".to_string(),
            drive_config: DriveConfig::Head,
            conveyor_direction: ConveyorDirection::Incline,
            design_capacity_tph: 400.0,
            belt_speed_m_s: 1.5,
            wrap_angle_deg: 210.0,
            material_name: "Bituminous Coal".to_string(),
            material_density_kg_m3: 800.0,
            lump_size_mm: 50.0,
            surcharge_angle_deg: 20.0,
            repose_angle_deg: 35.0,
            material_condition: "Dry".to_string(),
            horizontal_length_m: 250.0,
            lift_height_m: 12.0,
            carrier_pitch_m: 1.2,
            return_pitch_m: 3.0,
            trough_angle_deg: 35.0,
            belt_width_mm: 800.0,
            belt_mass_kg_m: 10.5,
            idler_mass_kg_m: 14.0,
            return_idler_mass_kg_m: None,
            belt_sag_percent: 2.0,
            friction_idlers: 0.02,
            drive_efficiency: 0.95,
            hopper_height_m: Some(2.5),
            hopper_width_m: Some(0.6),
            hopper_length_m: Some(1.5),
            skirt_length_m: Some(3.0),
            skirt_width_m: Some(0.53),
            tripper_count: None,
            scraper_count: Some(2),
            plough_count: Some(1),
        }
    }
}

// ============================================================================
// Stage outputs
// ============================================================================

/// Derived conveyor geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Incline angle α (rad)
    pub incline_rad: f64,
    /// Incline angle α (deg), for reporting
    pub incline_deg: f64,
    /// True conveyor length along the slope (m)
    pub slope_length_m: f64,
}

/// Capacity check against the design target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityCheck {
    /// Cross-section area of the load stream (m²)
    pub cross_section_m2: f64,
    /// Volumetric throughput (m³/h)
    pub volumetric_m3_h: f64,
    /// Mass throughput (t/h)
    pub mass_tph: f64,
    /// "OK" when mass throughput meets the design target
    pub status: CapacityStatus,
}

/// One-sided capacity verdict. Throughput exceeding the target is never
/// flagged; under-capacity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT OK")]
    NotOk,
}

impl CapacityStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CapacityStatus::Ok)
    }

    /// The serialized form, for display contexts.
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityStatus::Ok => "OK",
            CapacityStatus::NotOk => "NOT OK",
        }
    }
}

/// Per-metre masses feeding the resistance stage (kg/m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearMasses {
    /// Material on the carry strand, Wm
    pub material_kg_m: f64,
    /// Belt, Wb
    pub belt_kg_m: f64,
    /// Carrier idler rotating parts, Wi
    pub carry_idlers_kg_m: f64,
    /// Return idler rotating parts, Wri
    pub return_idlers_kg_m: f64,
}

/// Individual motion-opposing forces (N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resistances {
    /// Carry strand rolling friction
    pub carry_friction_n: f64,
    /// Return strand rolling friction
    pub return_friction_n: f64,
    /// Net material lift force felt by the drive
    pub lift_n: f64,
    /// Skirtboard friction, both sides
    pub skirt_n: f64,
    /// Hopper pull-out shear
    pub hopper_n: f64,
    /// Scrapers and ploughs
    pub cleaners_n: f64,
    /// Belt bending over pulleys
    pub bending_n: f64,
}

impl Resistances {
    /// Effective tension Te: sum of every resistance term. The single
    /// interface between this stage and both power and tension sizing.
    pub fn effective_tension_n(&self) -> f64 {
        self.carry_friction_n
            + self.return_friction_n
            + self.lift_n
            + self.skirt_n
            + self.hopper_n
            + self.cleaners_n
            + self.bending_n
    }
}

/// Power breakdown (kW) and the forces behind it (N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerAnalysis {
    /// Main rolling resistance, carry + return strands (N)
    pub f_idlers_n: f64,
    /// Net lift force (N)
    pub f_lift_n: f64,
    /// Hopper pull-out (N)
    pub f_hopper_n: f64,
    /// Skirtboard friction (N)
    pub f_skirt_n: f64,
    /// Belt bending (N)
    pub f_bending_n: f64,
    /// Cleaners (N)
    pub f_cleaners_n: f64,
    /// Effective tension Te (N)
    pub effective_tension_n: f64,

    /// Power against rolling friction (kW)
    pub p_horizontal_kw: f64,
    /// Power against lift (kW)
    pub p_lift_kw: f64,
    /// Power against accessory resistances (kW)
    pub p_accessories_kw: f64,
    /// Shaft power at the drive pulley (kW)
    pub p_shaft_kw: f64,
    /// Minimum motor power (kW)
    pub p_motor_min_kw: f64,
    /// Installed motor power including the safety margin (kW)
    pub p_motor_installed_kw: f64,
}

/// Belt tension map around the loop (N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensionAnalysis {
    /// Tight side at the drive pulley
    pub t1_n: f64,
    /// Slack side at the drive pulley
    pub t2_n: f64,
    /// Intermediate point after the drive (diagnostic approximation)
    pub t3_n: f64,
    /// Intermediate point before the tail (diagnostic approximation)
    pub t4_n: f64,
    /// Tail pulley tension
    pub t_tail_n: f64,
    /// Global maximum tension
    pub t_max_n: f64,
    /// Minimum tension required by sag control on the carrier strand
    pub min_tension_sag_n: f64,
    /// Minimum slack tension required by the capstan slip limit
    pub min_tension_slip_n: f64,
}

/// Drive pulley sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulleyAnalysis {
    /// Drive pulley diameter (mm)
    pub diameter_mm: f64,
    /// Pulley face width (mm)
    pub face_width_mm: f64,
    /// Shaft torque (Nm)
    pub shaft_torque_nm: f64,
    /// Resultant bearing load from the T1/T2 vector pair (N)
    pub resultant_load_n: f64,
}

/// Complete calculation result: a pure derivation of the input with no
/// further lifecycle. Handed to the report layer and discarded or
/// serialized externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConveyorResult {
    pub geometry: Geometry,
    pub capacity: CapacityCheck,
    pub power: PowerAnalysis,
    pub tension: TensionAnalysis,
    pub pulley: PulleyAnalysis,
}

// ============================================================================
// Stage functions
// ============================================================================

/// Stage 1: incline angle α = atan(H/L) and sloped length √(L² + H²).
///
/// L = 0 yields an undefined angle; [`ConveyorInput::validate`] rejects it
/// before this runs.
pub fn resolve_geometry(input: &ConveyorInput) -> Geometry {
    let l = input.horizontal_length_m;
    let h = input.lift_height_m;
    let incline_rad = (h / l).atan();
    Geometry {
        incline_rad,
        incline_deg: Degrees::from(Radians(incline_rad)).value(),
        slope_length_m: (l * l + h * h).sqrt(),
    }
}

/// Stage 2: throughput from belt geometry and speed, checked against the
/// design target.
///
/// The cross section is a two-bin area-factor approximation of the CEMA
/// tables: k = 0.17 for trough angles of 30° and up, 0.13 below.
pub fn evaluate_capacity(input: &ConveyorInput, constants: &CalcConstants) -> CapacityCheck {
    let area_factor = constants.area_factor(input.trough_angle_deg);
    let bw_m = input.belt_width_m().value();
    let cross_section_m2 = area_factor * bw_m * bw_m;

    let volumetric_m3_h = cross_section_m2 * input.belt_speed_m_s * 3600.0;
    let mass_tph = volumetric_m3_h * (input.material_density_kg_m3 / 1000.0);

    let status = if mass_tph >= input.design_capacity_tph {
        CapacityStatus::Ok
    } else {
        CapacityStatus::NotOk
    };

    CapacityCheck {
        cross_section_m2,
        volumetric_m3_h,
        mass_tph,
        status,
    }
}

/// Stage 3: per-metre masses.
///
/// Material mass uses the *target* design capacity, not the computed
/// throughput, so power sizing stays conservative:
/// Wm = Q·1000 / (3.6·V).
///
/// TODO: verify the 3.6 divisor against a CEMA worked example; dimensional
/// analysis suggests 3600 and the discrepancy scales every downstream
/// force by ~1000. Preserved as-is for parity with the reference worksheet.
pub fn derive_masses(input: &ConveyorInput) -> LinearMasses {
    let material_kg_m = (input.design_capacity_tph * 1000.0) / (3.6 * input.belt_speed_m_s);
    let carry_idlers_kg_m = input.idler_mass_kg_m;
    // Empirical ratio when no return idler data is given
    let return_idlers_kg_m = input
        .return_idler_mass_kg_m
        .unwrap_or(carry_idlers_kg_m * 0.4);

    LinearMasses {
        material_kg_m,
        belt_kg_m: input.belt_mass_kg_m,
        carry_idlers_kg_m,
        return_idlers_kg_m,
    }
}

/// Stage 4: every motion-opposing force.
///
/// Strand friction is split carry/return for tension accuracy. Belt weight
/// cancels around the loop, so only the material contributes lift force at
/// the drive. Accessory terms are fixed per-unit allowances.
pub fn aggregate_resistances(
    input: &ConveyorInput,
    geometry: &Geometry,
    masses: &LinearMasses,
    constants: &CalcConstants,
) -> Resistances {
    let g = constants.gravity_m_s2;
    let f = input.friction_idlers;
    let length = geometry.slope_length_m;
    let cos_a = geometry.incline_rad.cos();

    let carry_friction_n = f
        * length
        * g
        * (masses.belt_kg_m + masses.carry_idlers_kg_m + masses.material_kg_m)
        * cos_a;
    let return_friction_n = f * length * g * (masses.belt_kg_m + masses.return_idlers_kg_m) * cos_a;

    let lift_n = masses.material_kg_m * g * input.lift_height_m;

    let skirt_len = input.skirt_length_m.unwrap_or(0.0);
    let skirt_n = if skirt_len > 0.0 {
        // Two skirt plates
        skirt_len * 2.0 * constants.skirt_unit_n_per_m
    } else {
        0.0
    };

    let hopper_n = match input.hopper_height_m {
        Some(h) if h > 0.0 => constants.hopper_pullout_n,
        _ => 0.0,
    };

    let cleaners_n = f64::from(input.scraper_count.unwrap_or(0)) * constants.scraper_unit_n
        + f64::from(input.plough_count.unwrap_or(0)) * constants.plough_unit_n;

    Resistances {
        carry_friction_n,
        return_friction_n,
        lift_n,
        skirt_n,
        hopper_n,
        cleaners_n,
        bending_n: constants.belt_bending_n,
    }
}

/// Stage 5: effective tension to power.
///
/// Belt power Te·V/1000 in kW, shaft power through the drive efficiency,
/// installed motor power with the safety margin on top. Sub-powers are
/// reported per force group for diagnostics.
pub fn convert_power(
    input: &ConveyorInput,
    resistances: &Resistances,
    constants: &CalcConstants,
) -> PowerAnalysis {
    let v = input.belt_speed_m_s;
    let te = resistances.effective_tension_n();

    let p_belt_kw = te * v / 1000.0;
    let p_shaft_kw = p_belt_kw / input.drive_efficiency;
    let p_motor_installed_kw = p_shaft_kw * constants.motor_safety_factor;

    let f_idlers_n = resistances.carry_friction_n + resistances.return_friction_n;
    let f_accessories_n = resistances.skirt_n + resistances.hopper_n + resistances.cleaners_n;

    PowerAnalysis {
        f_idlers_n,
        f_lift_n: resistances.lift_n,
        f_hopper_n: resistances.hopper_n,
        f_skirt_n: resistances.skirt_n,
        f_bending_n: resistances.bending_n,
        f_cleaners_n: resistances.cleaners_n,
        effective_tension_n: te,
        p_horizontal_kw: f_idlers_n * v / 1000.0,
        p_lift_kw: resistances.lift_n * v / 1000.0,
        p_accessories_kw: f_accessories_n * v / 1000.0,
        p_shaft_kw,
        p_motor_min_kw: p_shaft_kw,
        p_motor_installed_kw,
    }
}

/// Stage 6: tight/slack tension map.
///
/// The capstan (Euler) relation gives the minimum slack tension to avoid
/// drive slip: T2 ≥ Te / (e^{μθ} − 1). Sag control gives a second minimum on
/// the carrier strand: (Wb + Wm)·g·S / (8·sag). The resolved T2 takes the
/// slip requirement, floored at the fixed minimum pre-tension; then
/// T1 = Te + T2. T3/T4/tail are diagnostic approximations, not per-span
/// solutions.
pub fn solve_tensions(
    input: &ConveyorInput,
    resistances: &Resistances,
    masses: &LinearMasses,
    constants: &CalcConstants,
) -> TensionAnalysis {
    let te = resistances.effective_tension_n();
    let theta = input.wrap_angle_rad().value();

    // Unbounded as θ → 0; a zero wrap angle never reaches here (validation)
    let drive_factor = 1.0 / ((constants.drive_friction_mu * theta).exp() - 1.0);
    let min_tension_slip_n = te * drive_factor;

    let sag_fraction = input.belt_sag_percent / 100.0;
    let min_tension_sag_n = (masses.belt_kg_m + masses.material_kg_m) * constants.gravity_m_s2
        * input.carrier_pitch_m
        / (8.0 * sag_fraction);

    let t2_n = min_tension_slip_n.max(constants.min_pretension_n);
    let t1_n = te + t2_n;

    TensionAnalysis {
        t1_n,
        t2_n,
        t3_n: t2_n - resistances.return_friction_n / 2.0,
        t4_n: t2_n - resistances.return_friction_n,
        t_tail_n: t2_n - resistances.return_friction_n,
        t_max_n: t1_n,
        min_tension_sag_n,
        min_tension_slip_n,
    }
}

/// Stage 7: drive pulley sizing.
///
/// Diameter is a fixed standard size, not derived from belt rating. Shaft
/// torque comes from Te at the pulley radius; the bearing load is the
/// vector resultant of T1 and T2 separated by the wrap angle (law of
/// cosines).
pub fn size_pulley(
    input: &ConveyorInput,
    resistances: &Resistances,
    tension: &TensionAnalysis,
    constants: &CalcConstants,
) -> PulleyAnalysis {
    let te = resistances.effective_tension_n();
    let diameter_m = Meters::from(Millimeters(constants.pulley_diameter_mm)).value();
    let theta = input.wrap_angle_rad().value();

    let t1 = tension.t1_n;
    let t2 = tension.t2_n;
    let resultant_load_n = (t1 * t1 + t2 * t2 - 2.0 * t1 * t2 * theta.cos()).sqrt();

    PulleyAnalysis {
        diameter_mm: constants.pulley_diameter_mm,
        face_width_mm: input.belt_width_mm + constants.face_width_clearance_mm,
        shaft_torque_nm: te * (diameter_m / 2.0),
        resultant_load_n,
    }
}

// ============================================================================
// Facade
// ============================================================================

/// Run the full pipeline with the reference worksheet constants.
///
/// Pure and stateless: identical input yields identical output, and
/// concurrent calls never share state.
///
/// # Errors
///
/// [`CalcError::InvalidInput`] for degenerate geometry (zero length or
/// speed, wrap angle outside (0°, 360°), efficiency outside (0, 1]) or
/// negative physical quantities.
pub fn calculate(input: &ConveyorInput) -> CalcResult<ConveyorResult> {
    calculate_with(input, &CalcConstants::default())
}

/// Run the full pipeline with injected constants.
pub fn calculate_with(
    input: &ConveyorInput,
    constants: &CalcConstants,
) -> CalcResult<ConveyorResult> {
    input.validate()?;

    let geometry = resolve_geometry(input);
    let capacity = evaluate_capacity(input, constants);
    let masses = derive_masses(input);
    let resistances = aggregate_resistances(input, &geometry, &masses, constants);
    let power = convert_power(input, &resistances, constants);
    let tension = solve_tensions(input, &resistances, &masses, constants);
    let pulley = size_pulley(input, &resistances, &tension, constants);

    Ok(ConveyorResult {
        geometry,
        capacity,
        power,
        tension,
        pulley,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    /// Horizontal, accessory-free conveyor with round numbers for
    /// hand-checkable force arithmetic.
    fn bare_input() -> ConveyorInput {
        ConveyorInput {
            label: "CV-00".to_string(),
            drive_config: DriveConfig::Head,
            conveyor_direction: ConveyorDirection::Horizontal,
            design_capacity_tph: 360.0,
            belt_speed_m_s: 2.0,
            wrap_angle_deg: 180.0,
            material_name: "Sand (Dry)".to_string(),
            material_density_kg_m3: 1600.0,
            lump_size_mm: 10.0,
            surcharge_angle_deg: 25.0,
            repose_angle_deg: 35.0,
            material_condition: "Dry".to_string(),
            horizontal_length_m: 100.0,
            lift_height_m: 0.0,
            carrier_pitch_m: 1.2,
            return_pitch_m: 3.0,
            trough_angle_deg: 35.0,
            belt_width_mm: 800.0,
            belt_mass_kg_m: 10.0,
            idler_mass_kg_m: 15.0,
            return_idler_mass_kg_m: None,
            belt_sag_percent: 2.0,
            friction_idlers: 0.02,
            drive_efficiency: 0.9,
            hopper_height_m: None,
            hopper_width_m: None,
            hopper_length_m: None,
            skirt_length_m: None,
            skirt_width_m: None,
            tripper_count: None,
            scraper_count: None,
            plough_count: None,
        }
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    #[test]
    fn test_geometry_incline() {
        let mut input = bare_input();
        input.horizontal_length_m = 250.0;
        input.lift_height_m = 12.0;

        let geo = resolve_geometry(&input);
        assert!(approx(geo.incline_rad, (12.0_f64 / 250.0).atan(), EPS));
        assert!(approx(geo.slope_length_m, (250.0_f64.powi(2) + 144.0).sqrt(), EPS));
        assert!(geo.incline_deg > 0.0);
    }

    #[test]
    fn test_geometry_horizontal() {
        let geo = resolve_geometry(&bare_input());
        assert_eq!(geo.incline_rad, 0.0);
        assert_eq!(geo.slope_length_m, 100.0);
    }

    #[test]
    fn test_geometry_decline_is_signed() {
        let mut input = bare_input();
        input.lift_height_m = -8.0;
        let geo = resolve_geometry(&input);
        assert!(geo.incline_rad < 0.0);
        assert!(geo.incline_deg < 0.0);
    }

    // ------------------------------------------------------------------
    // Capacity
    // ------------------------------------------------------------------

    #[test]
    fn test_capacity_scenario_deep_trough() {
        // 800 mm belt, 35 deg trough, 1.5 m/s, 800 kg/m3
        let mut input = bare_input();
        input.belt_width_mm = 800.0;
        input.trough_angle_deg = 35.0;
        input.belt_speed_m_s = 1.5;
        input.material_density_kg_m3 = 800.0;
        input.design_capacity_tph = 400.0;

        let cap = evaluate_capacity(&input, &CalcConstants::default());
        assert!(approx(cap.cross_section_m2, 0.1088, 1e-9));
        assert!(approx(cap.volumetric_m3_h, 587.52, 1e-6));
        assert!(approx(cap.mass_tph, 470.016, 1e-6));
        assert!(cap.status.is_ok());
    }

    #[test]
    fn test_capacity_scenario_shallow_trough() {
        // 600 mm belt, 20 deg trough, 2 m/s
        let mut input = bare_input();
        input.belt_width_mm = 600.0;
        input.trough_angle_deg = 20.0;
        input.belt_speed_m_s = 2.0;

        let cap = evaluate_capacity(&input, &CalcConstants::default());
        assert!(approx(cap.cross_section_m2, 0.0468, 1e-9));
        assert!(approx(cap.volumetric_m3_h, 336.96, 1e-6));
    }

    #[test]
    fn test_capacity_bin_edge_inclusive() {
        let constants = CalcConstants::default();
        let mut input = bare_input();

        input.trough_angle_deg = 30.0;
        let at_edge = evaluate_capacity(&input, &constants);
        assert!(approx(at_edge.cross_section_m2, 0.17 * 0.64, EPS));

        input.trough_angle_deg = 29.999;
        let below_edge = evaluate_capacity(&input, &constants);
        assert!(approx(below_edge.cross_section_m2, 0.13 * 0.64, EPS));
    }

    #[test]
    fn test_capacity_monotonic_in_speed_and_width() {
        let constants = CalcConstants::default();
        let mut input = bare_input();

        let mut prev = 0.0;
        for speed in [0.5, 1.0, 1.5, 2.0, 3.15, 4.0] {
            input.belt_speed_m_s = speed;
            let cap = evaluate_capacity(&input, &constants);
            assert!(cap.volumetric_m3_h > prev);
            assert!(cap.mass_tph > prev * input.material_density_kg_m3 / 1000.0 - EPS);
            prev = cap.volumetric_m3_h;
        }

        input.belt_speed_m_s = 2.0;
        prev = 0.0;
        for width in [500.0, 650.0, 800.0, 1000.0, 1200.0] {
            input.belt_width_mm = width;
            let cap = evaluate_capacity(&input, &constants);
            assert!(cap.volumetric_m3_h > prev);
            prev = cap.volumetric_m3_h;
        }
    }

    #[test]
    fn test_capacity_one_sided_status() {
        let constants = CalcConstants::default();
        let mut input = bare_input();
        // Computed mass throughput: 0.17 * 0.64 * 2 * 3600 * 1.6 = 1253.376 tph
        input.design_capacity_tph = 1253.0;
        assert!(evaluate_capacity(&input, &constants).status.is_ok());

        input.design_capacity_tph = 1254.0;
        assert_eq!(
            evaluate_capacity(&input, &constants).status,
            CapacityStatus::NotOk
        );
    }

    // ------------------------------------------------------------------
    // Masses
    // ------------------------------------------------------------------

    #[test]
    fn test_material_mass_from_design_capacity() {
        let masses = derive_masses(&bare_input());
        // 360 * 1000 / (3.6 * 2.0)
        assert!(approx(masses.material_kg_m, 50_000.0, EPS));
        assert_eq!(masses.belt_kg_m, 10.0);
        assert_eq!(masses.carry_idlers_kg_m, 15.0);
    }

    #[test]
    fn test_return_idler_default_ratio() {
        let mut input = bare_input();
        assert!(approx(derive_masses(&input).return_idlers_kg_m, 6.0, EPS));

        input.return_idler_mass_kg_m = Some(9.5);
        assert_eq!(derive_masses(&input).return_idlers_kg_m, 9.5);
    }

    // ------------------------------------------------------------------
    // Resistances
    // ------------------------------------------------------------------

    #[test]
    fn test_resistances_horizontal_bare() {
        let input = bare_input();
        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);

        // f*L*g*(Wb+Wi+Wm) = 0.02 * 100 * 9.81 * 50025
        assert!(approx(res.carry_friction_n, 981_490.5, 1e-6));
        // f*L*g*(Wb+Wri) = 19.62 * 16
        assert!(approx(res.return_friction_n, 313.92, 1e-9));
        assert_eq!(res.lift_n, 0.0);
        assert_eq!(res.skirt_n, 0.0);
        assert_eq!(res.hopper_n, 0.0);
        assert_eq!(res.cleaners_n, 0.0);
        assert_eq!(res.bending_n, 500.0);
        assert!(approx(res.effective_tension_n(), 982_304.42, 1e-6));
    }

    #[test]
    fn test_accessory_resistances() {
        let mut input = bare_input();
        input.skirt_length_m = Some(3.0);
        input.hopper_height_m = Some(2.5);
        input.scraper_count = Some(2);
        input.plough_count = Some(1);

        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);

        // 3 m skirt, two plates, 60 N/m
        assert!(approx(res.skirt_n, 360.0, EPS));
        assert_eq!(res.hopper_n, 1500.0);
        // 2 * 1500 + 1 * 800
        assert_eq!(res.cleaners_n, 3800.0);
    }

    #[test]
    fn test_lift_force_uses_material_only() {
        let mut input = bare_input();
        input.lift_height_m = 12.0;

        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);

        // Wm * g * H; belt weight cancels around the loop
        assert!(approx(res.lift_n, 50_000.0 * 9.81 * 12.0, 1e-6));
    }

    // ------------------------------------------------------------------
    // Power
    // ------------------------------------------------------------------

    #[test]
    fn test_power_chain() {
        let input = bare_input();
        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let power = convert_power(&input, &res, &constants);

        let te = res.effective_tension_n();
        assert!(approx(power.effective_tension_n, te, EPS));
        assert!(approx(power.p_shaft_kw, te * 2.0 / 1000.0 / 0.9, 1e-9));
        assert!(approx(
            power.p_motor_installed_kw,
            power.p_shaft_kw * 1.2,
            1e-9
        ));
        assert_eq!(power.p_motor_min_kw, power.p_shaft_kw);
        // Sub-powers per force group
        assert!(approx(
            power.p_horizontal_kw,
            (res.carry_friction_n + res.return_friction_n) * 2.0 / 1000.0,
            1e-9
        ));
        assert_eq!(power.p_lift_kw, 0.0);
        assert_eq!(power.p_accessories_kw, 0.0);
    }

    #[test]
    fn test_safety_factor_injection() {
        let input = bare_input();
        let base = calculate(&input).unwrap();
        let heavy = calculate_with(
            &input,
            &CalcConstants::default().with_safety_factor(1.5),
        )
        .unwrap();

        assert!(approx(
            heavy.power.p_motor_installed_kw,
            base.power.p_shaft_kw * 1.5,
            1e-9
        ));
        // Shaft power itself is unaffected by the margin
        assert!(approx(heavy.power.p_shaft_kw, base.power.p_shaft_kw, EPS));
    }

    // ------------------------------------------------------------------
    // Tension
    // ------------------------------------------------------------------

    #[test]
    fn test_tension_identity() {
        let input = bare_input();
        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let tension = solve_tensions(&input, &res, &masses, &constants);

        // T1 = Te + T2, exactly
        assert_eq!(tension.t1_n, res.effective_tension_n() + tension.t2_n);
        assert_eq!(tension.t_max_n, tension.t1_n);
    }

    #[test]
    fn test_slip_tension_capstan() {
        let input = bare_input();
        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let tension = solve_tensions(&input, &res, &masses, &constants);

        let theta = 180.0_f64.to_radians();
        let factor = 1.0 / ((0.35 * theta).exp() - 1.0);
        assert!(approx(
            tension.min_tension_slip_n,
            res.effective_tension_n() * factor,
            1e-6
        ));
        // Well above the floor here, so T2 equals the slip requirement
        assert_eq!(tension.t2_n, tension.min_tension_slip_n);
    }

    #[test]
    fn test_pretension_floor() {
        // Light conveyor: slip requirement far below 5 kN
        let mut input = bare_input();
        input.design_capacity_tph = 1.0;
        input.horizontal_length_m = 10.0;
        input.belt_mass_kg_m = 5.0;
        input.idler_mass_kg_m = 5.0;
        input.wrap_angle_deg = 210.0;

        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let tension = solve_tensions(&input, &res, &masses, &constants);

        assert!(tension.min_tension_slip_n < 5000.0);
        assert_eq!(tension.t2_n, 5000.0);
    }

    #[test]
    fn test_sag_minimum_tension() {
        let input = bare_input();
        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let tension = solve_tensions(&input, &res, &masses, &constants);

        // (Wb + Wm) * g * S / (8 * 0.02)
        let expected = (10.0 + 50_000.0) * 9.81 * 1.2 / 0.16;
        assert!(approx(tension.min_tension_sag_n, expected, 1e-6));
    }

    #[test]
    fn test_tension_intermediate_points() {
        let input = bare_input();
        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let tension = solve_tensions(&input, &res, &masses, &constants);

        assert_eq!(tension.t3_n, tension.t2_n - res.return_friction_n / 2.0);
        assert_eq!(tension.t4_n, tension.t2_n - res.return_friction_n);
        assert_eq!(tension.t_tail_n, tension.t4_n);
    }

    #[test]
    fn test_small_wrap_angle_diverges() {
        // The capstan factor blows up toward zero wrap; validation rejects
        // zero itself, and near-zero wraps must show the divergence rather
        // than look like a viable design point.
        let mut input = bare_input();
        input.wrap_angle_deg = 0.01;

        let constants = CalcConstants::default();
        let geo = resolve_geometry(&input);
        let masses = derive_masses(&input);
        let res = aggregate_resistances(&input, &geo, &masses, &constants);
        let tension = solve_tensions(&input, &res, &masses, &constants);

        assert!(tension.min_tension_slip_n > 100.0 * res.effective_tension_n());

        input.wrap_angle_deg = 0.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    // ------------------------------------------------------------------
    // Pulley
    // ------------------------------------------------------------------

    #[test]
    fn test_pulley_sizing() {
        let input = bare_input();
        let result = calculate(&input).unwrap();

        assert_eq!(result.pulley.diameter_mm, 600.0);
        assert_eq!(result.pulley.face_width_mm, 900.0);
        assert!(approx(
            result.pulley.shaft_torque_nm,
            result.power.effective_tension_n * 0.3,
            1e-6
        ));
    }

    #[test]
    fn test_resultant_load_triangle_bounds() {
        for wrap in [30.0, 90.0, 120.0, 179.0, 180.0] {
            let mut input = bare_input();
            input.wrap_angle_deg = wrap;
            let result = calculate(&input).unwrap();

            let t1 = result.tension.t1_n;
            let t2 = result.tension.t2_n;
            let r = result.pulley.resultant_load_n;
            assert!(r >= (t1 - t2).abs() - 1e-6, "wrap {wrap}: R below |T1-T2|");
            assert!(r <= t1 + t2 + 1e-6, "wrap {wrap}: R above T1+T2");
        }
    }

    // ------------------------------------------------------------------
    // Facade
    // ------------------------------------------------------------------

    #[test]
    fn test_calculate_is_idempotent() {
        let input = ConveyorInput::example();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_constants_injection_changes_result() {
        let input = bare_input();
        let base = calculate(&input).unwrap();
        let low_g = calculate_with(&input, &CalcConstants::default().with_gravity(1.62)).unwrap();

        assert!(low_g.power.f_idlers_n < base.power.f_idlers_n);
        // Bending allowance is gravity-independent
        assert_eq!(low_g.power.f_bending_n, base.power.f_bending_n);
    }

    #[test]
    fn test_validation_rejects_degenerate_inputs() {
        let cases: Vec<(&str, Box<dyn Fn(&mut ConveyorInput)>)> = vec![
            ("zero length", Box::new(|i| i.horizontal_length_m = 0.0)),
            ("zero speed", Box::new(|i| i.belt_speed_m_s = 0.0)),
            ("zero wrap", Box::new(|i| i.wrap_angle_deg = 0.0)),
            ("full wrap", Box::new(|i| i.wrap_angle_deg = 360.0)),
            ("zero efficiency", Box::new(|i| i.drive_efficiency = 0.0)),
            ("efficiency above 1", Box::new(|i| i.drive_efficiency = 1.1)),
            ("negative density", Box::new(|i| i.material_density_kg_m3 = -1.0)),
            ("negative belt mass", Box::new(|i| i.belt_mass_kg_m = -1.0)),
            ("negative friction", Box::new(|i| i.friction_idlers = -0.5)),
            ("zero sag", Box::new(|i| i.belt_sag_percent = 0.0)),
        ];

        for (name, mutate) in cases {
            let mut input = bare_input();
            mutate(&mut input);
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "case: {name}");
        }
    }

    #[test]
    fn test_result_serialization_roundtrip() {
        let input = ConveyorInput::example();
        let result = calculate(&input).unwrap();

        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: ConveyorResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);

        let input_json = serde_json::to_string(&input).unwrap();
        assert!(input_json.contains("\"drive_config\":\"Head\""));
        let input_back: ConveyorInput = serde_json::from_str(&input_json).unwrap();
        assert_eq!(input, input_back);
    }

    #[test]
    fn test_capacity_status_serialization() {
        let ok = serde_json::to_string(&CapacityStatus::Ok).unwrap();
        assert_eq!(ok, "\"OK\"");
        let not_ok = serde_json::to_string(&CapacityStatus::NotOk).unwrap();
        assert_eq!(not_ok, "\"NOT OK\"");
    }
}
