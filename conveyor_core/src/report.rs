//! # Report Module
//!
//! Generates PDF calculation reports via Typst.
//!
//! ## Architecture
//!
//! - Typst templates are embedded as string constants
//! - Data is injected via string formatting before compilation
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use conveyor_core::report::render_conveyor_pdf;
//! use conveyor_core::calculations::conveyor::{calculate, ConveyorInput};
//!
//! let input = ConveyorInput::example();
//! let result = calculate(&input).unwrap();
//! let pdf_bytes = render_conveyor_pdf(&input, &result, "Jane Engineer", "26-014").unwrap();
//! std::fs::write("conveyor_report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::conveyor::{calculate, ConveyorInput, ConveyorResult};
use crate::calculations::CalculationItem;
use crate::errors::{CalcError, CalcResult};
use crate::project::Project;
use crate::units::{Kilonewtons, Newtons};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct ReportWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl ReportWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        ReportWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();

        // Bundled fonts from typst-assets (Libertinus, New Computer Modern)
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }

        fonts
    }
}

impl World for ReportWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Typst template for a single conveyor calculation report
const CONVEYOR_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2.5cm, bottom: 2.5cm, left: 2.5cm, right: 2.5cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[ConveyorCalc Design Calculations]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Job: {{JOB_ID}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

// Title Block
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Belt Conveyor Design Calculation]
    #v(4pt)
    #text(size: 14pt)[{{CONVEYOR_LABEL}}]
  ]
]

#v(12pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Project Information*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Engineer:], [{{ENGINEER}}],
      [Job ID:], [{{JOB_ID}}],
      [Date:], [{{DATE}}],
    )
  ],
  [
    *Design Basis*
    #v(4pt)
    CEMA 7th Edition (Belt Conveyors for Bulk Materials), analytical method
  ]
)

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Input Parameters

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
  [Material], [{{MATERIAL}}], [],
  [Bulk Density], [{{DENSITY}}], [kg/m#super[3]],
  [Design Capacity], [{{DESIGN_CAPACITY}}], [t/h],
  [Belt Width], [{{BELT_WIDTH}}], [mm],
  [Belt Speed], [{{BELT_SPEED}}], [m/s],
  [Trough Angle], [{{TROUGH_ANGLE}}], [deg],
  [Horizontal Length], [{{LENGTH}}], [m],
  [Lift Height], [{{LIFT}}], [m],
  [Drive Wrap Angle], [{{WRAP_ANGLE}}], [deg],
  [Drive Efficiency], [{{EFFICIENCY}}], [],
)

#v(12pt)

== Conveying Capacity

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
  [Cross-Sectional Area], [{{AREA}}], [m#super[2]],
  [Volumetric Capacity], [{{VOL_CAPACITY}}], [m#super[3]/h],
  [Mass Capacity], [{{MASS_CAPACITY}}], [t/h],
  [Design Capacity], [{{DESIGN_CAPACITY}}], [t/h],
)

#v(12pt)

== Power

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
  [Effective Tension (Te)], [{{TE}}], [N],
  [Shaft Power], [{{SHAFT_POWER}}], [kW],
  [Motor Power (with drive losses)], [{{MOTOR_POWER}}], [kW],
  [Installed Power (recommended)], [{{INSTALLED_POWER}}], [kW],
)

#v(12pt)

== Belt Tensions

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Tension*], [*Value*], [*Unit*]),
  [T1 (tight side)], [{{T1}}], [N],
  [T2 (slack side)], [{{T2}}], [N],
  [T3 (carry entry)], [{{T3}}], [N],
  [T4 (return exit)], [{{T4}}], [N],
  [Slip Limit (T2 min)], [{{T2_SLIP}}], [N],
  [Sag Limit (T2 min)], [{{T2_SAG}}], [N],
)

#v(12pt)

== Drive Pulley

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
  [Pulley Diameter], [{{PULLEY_DIA}}], [mm],
  [Face Width], [{{FACE_WIDTH}}], [mm],
  [Shaft Torque], [{{TORQUE}}], [N·m],
  [Resultant Bearing Load], [{{RESULTANT}}], [kN],
)

#v(16pt)

#let capacity_status = "{{CAPACITY_STATUS}}"
#align(center)[
  #block(
    width: auto,
    fill: if capacity_status == "OK" { rgb("#d4edda") } else { rgb("#f8d7da") },
    inset: 16pt,
    radius: 4pt
  )[
    #text(size: 16pt, weight: "bold")[
      #if capacity_status == "OK" [
        CAPACITY ADEQUATE
      ] else [
        CAPACITY INADEQUATE
      ]
    ]
    #v(4pt)
    #text(size: 12pt)[Belt capacity {{MASS_CAPACITY}} t/h vs design {{DESIGN_CAPACITY}} t/h]
  ]
]

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Generated by ConveyorCalc \
  Calculations should be verified by a licensed professional engineer.
]
"##;

// ============================================================================
// Rendering Functions
// ============================================================================

/// Render one conveyor calculation to PDF.
///
/// # Arguments
///
/// * `input` - The conveyor input parameters
/// * `result` - The calculation results
/// * `engineer` - Engineer name for the report
/// * `job_id` - Job/project ID
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If rendering fails
pub fn render_conveyor_pdf(
    input: &ConveyorInput,
    result: &ConveyorResult,
    engineer: &str,
    job_id: &str,
) -> CalcResult<Vec<u8>> {
    let source = fill_conveyor_template(CONVEYOR_TEMPLATE, input, result)
        .replace("{{ENGINEER}}", &escape_typst(engineer))
        .replace("{{JOB_ID}}", &escape_typst(job_id))
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string());

    compile_to_pdf(source)
}

/// Render an entire project (all conveyors) to a single PDF.
///
/// Conveyors are ordered by label. Tank standard classifications are not
/// rendered; only conveyor calculations carry enough data for a full page.
///
/// # Errors
///
/// Fails when the project contains no conveyors, or when any conveyor's
/// inputs no longer validate.
pub fn render_project_pdf(project: &Project) -> CalcResult<Vec<u8>> {
    let mut conveyors: Vec<(&ConveyorInput, ConveyorResult)> = Vec::new();

    for item in project.items.values() {
        if let CalculationItem::Conveyor(conveyor) = item {
            match calculate(conveyor) {
                Ok(result) => conveyors.push((conveyor, result)),
                Err(e) => {
                    return Err(CalcError::Internal {
                        message: format!(
                            "Failed to calculate conveyor '{}': {}",
                            conveyor.label, e
                        ),
                    });
                }
            }
        }
    }

    if conveyors.is_empty() {
        return Err(CalcError::Internal {
            message: "Project has no conveyors to export".to_string(),
        });
    }

    conveyors.sort_by(|a, b| a.0.label.cmp(&b.0.label));

    let mut source = format!(
        r##"
#set page(
  paper: "a4",
  margin: (top: 2.5cm, bottom: 2.5cm, left: 2.5cm, right: 2.5cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[ConveyorCalc Design Calculations]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Job: {job_id}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{date}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

// Cover Page
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 20pt, radius: 4pt)[
    #text(size: 24pt, weight: "bold")[Conveyor Design Calculation Package]
    #v(8pt)
    #text(size: 16pt)[{client}]
  ]
]

#v(24pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Project Information*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Engineer:], [{engineer}],
      [Job ID:], [{job_id}],
      [Client:], [{client}],
      [Date:], [{date}],
    )
  ],
  [
    *Design Basis*
    #v(4pt)
    CEMA 7th Edition (Belt Conveyors for Bulk Materials), analytical method
  ]
)

#v(24pt)

== Calculation Summary

#table(
  columns: (auto, 1fr, auto, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, left, right, right, center),
  table.header([*No.*], [*Conveyor*], [*Motor Power (kW)*], [*T1 (N)*], [*Capacity*]),
{summary_rows}
)

#v(24pt)
#text(size: 9pt, fill: gray)[
  Generated by ConveyorCalc \
  Calculations should be verified by a licensed professional engineer.
]
"##,
        job_id = escape_typst(&project.meta.job_id),
        date = Utc::now().format("%Y-%m-%d"),
        client = escape_typst(&project.meta.client),
        engineer = escape_typst(&project.meta.engineer),
        summary_rows = build_summary_rows(&conveyors),
    );

    for (input, result) in &conveyors {
        source.push_str("\n#pagebreak()\n");
        source.push_str(&fill_conveyor_template(CONVEYOR_PAGE_TEMPLATE, input, result));
    }

    let source = source
        .replace("{{ENGINEER}}", &escape_typst(&project.meta.engineer))
        .replace("{{JOB_ID}}", &escape_typst(&project.meta.job_id))
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string());

    compile_to_pdf(source)
}

/// Per-conveyor page used inside the project package. Same body as the
/// standalone template, but without the page setup and project block.
const CONVEYOR_PAGE_TEMPLATE: &str = r##"
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Belt Conveyor Design Calculation]
    #v(4pt)
    #text(size: 14pt)[{{CONVEYOR_LABEL}}]
  ]
]

#v(12pt)

== Input Parameters

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
  [Material], [{{MATERIAL}}], [],
  [Bulk Density], [{{DENSITY}}], [kg/m#super[3]],
  [Design Capacity], [{{DESIGN_CAPACITY}}], [t/h],
  [Belt Width], [{{BELT_WIDTH}}], [mm],
  [Belt Speed], [{{BELT_SPEED}}], [m/s],
  [Trough Angle], [{{TROUGH_ANGLE}}], [deg],
  [Horizontal Length], [{{LENGTH}}], [m],
  [Lift Height], [{{LIFT}}], [m],
  [Drive Wrap Angle], [{{WRAP_ANGLE}}], [deg],
  [Drive Efficiency], [{{EFFICIENCY}}], [],
)

#v(12pt)

== Conveying Capacity

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
  [Cross-Sectional Area], [{{AREA}}], [m#super[2]],
  [Volumetric Capacity], [{{VOL_CAPACITY}}], [m#super[3]/h],
  [Mass Capacity], [{{MASS_CAPACITY}}], [t/h],
  [Design Capacity], [{{DESIGN_CAPACITY}}], [t/h],
)

#v(12pt)

== Power

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
  [Effective Tension (Te)], [{{TE}}], [N],
  [Shaft Power], [{{SHAFT_POWER}}], [kW],
  [Motor Power (with drive losses)], [{{MOTOR_POWER}}], [kW],
  [Installed Power (recommended)], [{{INSTALLED_POWER}}], [kW],
)

#v(12pt)

== Belt Tensions

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Tension*], [*Value*], [*Unit*]),
  [T1 (tight side)], [{{T1}}], [N],
  [T2 (slack side)], [{{T2}}], [N],
  [T3 (carry entry)], [{{T3}}], [N],
  [T4 (return exit)], [{{T4}}], [N],
  [Slip Limit (T2 min)], [{{T2_SLIP}}], [N],
  [Sag Limit (T2 min)], [{{T2_SAG}}], [N],
)

#v(12pt)

== Drive Pulley

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
  [Pulley Diameter], [{{PULLEY_DIA}}], [mm],
  [Face Width], [{{FACE_WIDTH}}], [mm],
  [Shaft Torque], [{{TORQUE}}], [N·m],
  [Resultant Bearing Load], [{{RESULTANT}}], [kN],
)

#v(16pt)

#align(center)[
  #block(
    width: auto,
    fill: if "{{CAPACITY_STATUS}}" == "OK" { rgb("#d4edda") } else { rgb("#f8d7da") },
    inset: 16pt,
    radius: 4pt
  )[
    #text(size: 16pt, weight: "bold")[
      #if "{{CAPACITY_STATUS}}" == "OK" [
        CAPACITY ADEQUATE
      ] else [
        CAPACITY INADEQUATE
      ]
    ]
    #v(4pt)
    #text(size: 12pt)[Belt capacity {{MASS_CAPACITY}} t/h vs design {{DESIGN_CAPACITY}} t/h]
  ]
]
"##;

/// Substitute one conveyor's numbers into a template.
fn fill_conveyor_template(
    template: &str,
    input: &ConveyorInput,
    result: &ConveyorResult,
) -> String {
    template
        .replace("{{CONVEYOR_LABEL}}", &escape_typst(&input.label))
        .replace("{{MATERIAL}}", &escape_typst(&input.material_name))
        .replace("{{DENSITY}}", &format!("{:.0}", input.material_density_kg_m3))
        .replace(
            "{{DESIGN_CAPACITY}}",
            &format!("{:.0}", input.design_capacity_tph),
        )
        .replace("{{BELT_WIDTH}}", &format!("{:.0}", input.belt_width_mm))
        .replace("{{BELT_SPEED}}", &format!("{:.2}", input.belt_speed_m_s))
        .replace("{{TROUGH_ANGLE}}", &format!("{:.0}", input.trough_angle_deg))
        .replace("{{LENGTH}}", &format!("{:.1}", input.horizontal_length_m))
        .replace("{{LIFT}}", &format!("{:.1}", input.lift_height_m))
        .replace("{{WRAP_ANGLE}}", &format!("{:.0}", input.wrap_angle_deg))
        .replace("{{EFFICIENCY}}", &format!("{:.2}", input.drive_efficiency))
        .replace("{{AREA}}", &format!("{:.4}", result.capacity.cross_section_m2))
        .replace(
            "{{VOL_CAPACITY}}",
            &format!("{:.1}", result.capacity.volumetric_m3_h),
        )
        .replace(
            "{{MASS_CAPACITY}}",
            &format!("{:.1}", result.capacity.mass_tph),
        )
        .replace("{{TE}}", &format!("{:.0}", result.power.effective_tension_n))
        .replace(
            "{{SHAFT_POWER}}",
            &format!("{:.1}", result.power.p_shaft_kw),
        )
        .replace(
            "{{MOTOR_POWER}}",
            &format!("{:.1}", result.power.p_motor_min_kw),
        )
        .replace(
            "{{INSTALLED_POWER}}",
            &format!("{:.1}", result.power.p_motor_installed_kw),
        )
        .replace("{{T1}}", &format!("{:.0}", result.tension.t1_n))
        .replace("{{T2}}", &format!("{:.0}", result.tension.t2_n))
        .replace("{{T3}}", &format!("{:.0}", result.tension.t3_n))
        .replace("{{T4}}", &format!("{:.0}", result.tension.t4_n))
        .replace(
            "{{T2_SLIP}}",
            &format!("{:.0}", result.tension.min_tension_slip_n),
        )
        .replace(
            "{{T2_SAG}}",
            &format!("{:.0}", result.tension.min_tension_sag_n),
        )
        .replace(
            "{{PULLEY_DIA}}",
            &format!("{:.0}", result.pulley.diameter_mm),
        )
        .replace(
            "{{FACE_WIDTH}}",
            &format!("{:.0}", result.pulley.face_width_mm),
        )
        .replace("{{TORQUE}}", &format!("{:.0}", result.pulley.shaft_torque_nm))
        .replace(
            "{{RESULTANT}}",
            &format!(
                "{:.1}",
                Kilonewtons::from(Newtons(result.pulley.resultant_load_n)).value()
            ),
        )
        .replace("{{CAPACITY_STATUS}}", result.capacity.status.as_str())
}

fn compile_to_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = ReportWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    Ok(pdf_bytes)
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Build summary table rows for the cover page
fn build_summary_rows(conveyors: &[(&ConveyorInput, ConveyorResult)]) -> String {
    conveyors
        .iter()
        .enumerate()
        .map(|(i, (input, result))| {
            format!(
                "  [{}], [{}], [{:.1}], [{:.0}], [{}],",
                i + 1,
                escape_typst(&input.label),
                result.power.p_motor_min_kw,
                result.tension.t1_n,
                result.capacity.status.as_str(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("CV-101"), "CV-101");
        assert_eq!(escape_typst("Silo #2"), "Silo \\#2");
        assert_eq!(escape_typst("a*b_c"), "a\\*b\\_c");
    }

    #[test]
    fn test_conveyor_pdf_generation() {
        let input = ConveyorInput::example();
        let result = calculate(&input).unwrap();
        let pdf = render_conveyor_pdf(&input, &result, "Test Engineer", "TEST-001");

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_project_pdf_requires_conveyors() {
        let project = Project::new("Test", "TEST-001", "Client");
        assert!(render_project_pdf(&project).is_err());
    }

    #[test]
    fn test_project_pdf_generation() {
        let mut project = Project::new("Test Engineer", "TEST-001", "Test Client");
        project.add_item(CalculationItem::Conveyor(ConveyorInput::example()));

        let pdf = render_project_pdf(&project).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
