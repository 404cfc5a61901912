//! # ConveyorCalc CLI Application
//!
//! Terminal front-end for the conveyor calculation engine. Prompts for the
//! handful of inputs that usually vary between studies, runs the full
//! pipeline, and prints a formatted summary plus the raw JSON result.

use std::io::{self, BufRead, Write};

use conveyor_core::calculations::conveyor::{calculate, ConveyorInput};
use conveyor_core::materials::material_by_name;
use conveyor_core::units::{Kilonewtons, Newtons};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("ConveyorCalc CLI - Belt Conveyor Design Calculator");
    println!("==================================================");
    println!();

    let capacity_tph = prompt_f64("Design capacity (t/h) [400.0]: ", 400.0);
    let belt_speed = prompt_f64("Belt speed (m/s) [1.5]: ", 1.5);
    let belt_width = prompt_f64("Belt width (mm) [800.0]: ", 800.0);
    let length_m = prompt_f64("Horizontal length (m) [250.0]: ", 250.0);
    let lift_m = prompt_f64("Lift height (m) [12.0]: ", 12.0);

    println!();
    println!("Calculating {} mm belt conveying bituminous coal...", belt_width);
    println!();

    let mut input = ConveyorInput::example();
    input.label = "CLI-Demo".to_string();
    input.design_capacity_tph = capacity_tph;
    input.belt_speed_m_s = belt_speed;
    input.belt_width_mm = belt_width;
    input.horizontal_length_m = length_m;
    input.lift_height_m = lift_m;

    if let Ok(material) = material_by_name(&input.material_name) {
        input.material_density_kg_m3 = material.density_mean();
        input.repose_angle_deg = material.angle_repose_deg;
        input.surcharge_angle_deg = material.angle_surcharge_deg;
    }

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  CONVEYOR CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Capacity: {:.0} t/h at {:.2} m/s", capacity_tph, belt_speed);
            println!("  Belt:     {:.0} mm wide, {:.0}° trough", belt_width, input.trough_angle_deg);
            println!("  Profile:  {:.1} m horizontal, {:.1} m lift ({:.1}°)",
                length_m, lift_m, result.geometry.incline_deg);
            println!();
            println!("Capacity:");
            println!("  Cross-section: {:.4} m²", result.capacity.cross_section_m2);
            println!("  Belt capacity: {:.1} t/h ({:.1} m³/h) {}",
                result.capacity.mass_tph,
                result.capacity.volumetric_m3_h,
                status_icon(result.capacity.status.is_ok())
            );
            println!();
            println!("Power:");
            println!("  Te:        {:.0} N", result.power.effective_tension_n);
            println!("  Shaft:     {:.1} kW", result.power.p_shaft_kw);
            println!("  Motor:     {:.1} kW", result.power.p_motor_min_kw);
            println!("  Installed: {:.1} kW", result.power.p_motor_installed_kw);
            println!();
            println!("Tensions:");
            println!("  T1 = {:.0} N (tight side)", result.tension.t1_n);
            println!("  T2 = {:.0} N (slack side; slip min {:.0} N, sag min {:.0} N)",
                result.tension.t2_n,
                result.tension.min_tension_slip_n,
                result.tension.min_tension_sag_n
            );
            println!("  T3 = {:.0} N, T4 = {:.0} N, tail = {:.0} N",
                result.tension.t3_n,
                result.tension.t4_n,
                result.tension.t_tail_n
            );
            println!();
            println!("Drive Pulley:");
            println!("  Diameter:  {:.0} mm (face {:.0} mm)",
                result.pulley.diameter_mm, result.pulley.face_width_mm);
            println!("  Torque:    {:.0} N·m", result.pulley.shaft_torque_nm);
            println!(
                "  Resultant: {:.1} kN",
                Kilonewtons::from(Newtons(result.pulley.resultant_load_n)).value()
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  CAPACITY CHECK: {}", result.capacity.status.as_str());
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[NOT OK]" }
}
