use crate::cli;
use crate::config::OutputConfig;
use crate::core::{AssessmentResults, ComponentAssessment};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Terminal,
}

impl From<cli::OutputFormat> for OutputFormat {
    fn from(format: cli::OutputFormat) -> Self {
        match format {
            cli::OutputFormat::Json => OutputFormat::Json,
            cli::OutputFormat::Csv => OutputFormat::Csv,
            cli::OutputFormat::Terminal => OutputFormat::Terminal,
        }
    }
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AssessmentResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AssessmentResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// CSV serialization of the per-component indicator table.
///
/// Columns: `id,name,mass_kg,cci,cii,lfi,v,w,r_in,r_out,abs_r,c`, values
/// rendered to 2 decimals with a configurable delimiter and decimal
/// separator.
pub struct CsvWriter<W: Write> {
    writer: W,
    delimiter: char,
    decimal_comma: bool,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: ',',
            decimal_comma: false,
        }
    }

    pub fn with_options(writer: W, config: &OutputConfig) -> Self {
        Self {
            writer,
            delimiter: config.delimiter,
            decimal_comma: config.decimal_comma,
        }
    }

}

fn format_value(value: f64, decimal_comma: bool) -> String {
    let formatted = format!("{:.2}", value);
    if decimal_comma {
        formatted.replace('.', ",")
    } else {
        formatted
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_results(&mut self, results: &AssessmentResults) -> anyhow::Result<()> {
        let decimal_comma = self.decimal_comma;
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter as u8)
            .from_writer(&mut self.writer);

        csv_writer.write_record([
            "id", "name", "mass_kg", "cci", "cii", "lfi", "v", "w", "r_in", "r_out", "abs_r", "c",
        ])?;

        for assessment in &results.components {
            let flows = &assessment.flows;
            let value = |v: f64| format_value(v, decimal_comma);
            csv_writer.write_record([
                assessment.component.id.clone(),
                assessment.component.name.clone(),
                value(assessment.component.mass_kg),
                value(assessment.cci),
                value(assessment.cii),
                value(assessment.lfi),
                value(flows.virgin),
                value(flows.waste),
                value(flows.recycle_in),
                value(flows.recycle_out),
                value(flows.imbalance),
                value(flows.reused),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter {
    verbosity: u8,
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self { verbosity: 0 }
    }

    pub fn with_verbosity(verbosity: u8) -> Self {
        Self { verbosity }
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &AssessmentResults) -> anyhow::Result<()> {
        print_header(results);
        print_summary(results);
        print_component_table(results);
        print_warnings(results);
        if self.verbosity >= 1 {
            print_debug_snapshot(results);
        }
        Ok(())
    }
}

fn print_header(results: &AssessmentResults) {
    println!();
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!("{}", "        CIRCULARITY ASSESSMENT".bold().cyan());
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!();
    println!("Product:   {}", results.product_name.bold());
    println!(
        "Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn pci_colored(pci: f64) -> ColoredString {
    let formatted = format!("{:.3}", pci);
    if pci >= 0.7 {
        formatted.green().bold()
    } else if pci >= 0.3 {
        formatted.yellow().bold()
    } else {
        formatted.red().bold()
    }
}

fn print_summary(results: &AssessmentResults) {
    println!("📊 {}", "SUMMARY".bold());
    println!("───────────────────────────────────────────");
    println!("  Components:     {}", results.components.len());
    println!("  Total mass:     {:.3} kg", results.total_mass_kg);
    println!("  Use factor X:   {:.3}", results.use_factor);
    println!("  PCI:            {}", pci_colored(results.pci));
    println!();
}

fn print_component_table(results: &AssessmentResults) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["ID", "Name", "Mass (kg)", "LFI", "CCI", "CII (%)"]);

    for assessment in &results.components {
        table.add_row([
            Cell::new(&assessment.component.id),
            Cell::new(&assessment.component.name),
            Cell::new(format!("{:.3}", assessment.component.mass_kg))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", assessment.lfi)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", assessment.cci)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", assessment.cii)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

fn component_warnings(assessment: &ComponentAssessment) -> impl Iterator<Item = String> + '_ {
    let id = assessment.component.id.clone();
    assessment
        .warnings
        .iter()
        .map(move |warning| format!("{}: {}", id, warning))
}

fn print_warnings(results: &AssessmentResults) {
    let warnings: Vec<String> = results.components.iter().flat_map(component_warnings).collect();
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("⚠️  {}", "WARNINGS".bold().yellow());
    for warning in warnings {
        println!("  {}", warning.yellow());
    }
}

fn print_debug_snapshot(results: &AssessmentResults) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["ID", "V", "W", "Rin", "Rout", "|Rin-Rout|", "C"]);

    for row in &results.debug {
        table.add_row([
            Cell::new(&row.id),
            Cell::new(format!("{:.4}", row.virgin)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.waste)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.recycle_in)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.recycle_out)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.imbalance)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.reused)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!();
    println!("🔍 {}", "MASS FLOWS".bold());
    println!("{table}");
}

/// Create a writer for the given format, targeting stdout.
pub fn create_writer(format: OutputFormat, config: &OutputConfig, verbosity: u8) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Csv => Box::new(CsvWriter::with_options(std::io::stdout(), config)),
        OutputFormat::Terminal => Box::new(TerminalWriter::with_verbosity(verbosity)),
    }
}

/// Create a writer for the given format, targeting a file. The terminal
/// format has no file form and falls back to CSV.
pub fn create_file_writer(
    format: OutputFormat,
    path: &Path,
    config: &OutputConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = File::create(path)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Csv | OutputFormat::Terminal => {
            Box::new(CsvWriter::with_options(file, config))
        }
    })
}
