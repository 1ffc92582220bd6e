use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::header::HeaderPolicy;
use crate::resolve::{convert, ConversionSummary, ConvertOptions};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input file in '#CHROM POS ID allele1 allele2' format (optionally gzipped)
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Output file in '#CHROM POS ID REF ALT' format
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Directory holding one reference FASTA per chromosome (chr1.fa, ..., chrX.fa, chrM.fa)
    #[arg(short, long, required = true)]
    pub reference: PathBuf,

    /// How strictly to check the input header line
    #[arg(long, value_enum, default_value = "strict")]
    pub header_policy: HeaderPolicy,

    /// Do not write the '##fileformat=VCFv4.2' line before the output header
    #[arg(long)]
    pub no_fileformat_line: bool,
}

/// Execute the conversion
///
/// # Errors
///
/// Returns an error if a precondition fails (missing input or reference
/// directory, bad header) or if reading or writing fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConvertArgs, format: OutputFormat) -> anyhow::Result<()> {
    let options = ConvertOptions::new(&args.input, &args.output, &args.reference)
        .with_header_policy(args.header_policy)
        .with_fileformat_line(!args.no_fileformat_line);

    let summary = convert(&options)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &ConversionSummary) {
    let stats = &summary.stats;

    println!("Conversion Summary");
    println!("{}", "=".repeat(60));
    println!("\nInput:  {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    println!("Reference files opened: {}", summary.reference_files_opened);

    println!("\nRecords:");
    println!("  Total:    {}", stats.total);
    println!("  Resolved: {}", stats.resolved);
    println!("  Skipped:  {}", stats.rejected());

    if stats.rejected() > 0 {
        println!("\nSkipped records:");
        let rows = [
            ("Allele mismatch", stats.mismatched),
            ("Out of bounds", stats.out_of_bounds),
            ("Bad position", stats.bad_position),
            ("Invalid allele", stats.invalid_allele),
            ("Missing reference file", stats.missing_reference),
            ("Reference open error", stats.reference_open_error),
            ("Fetch error", stats.fetch_error),
            ("Malformed line", stats.malformed),
        ];
        for (label, count) in rows.iter().filter(|(_, count)| *count > 0) {
            println!("  {label}: {count}");
        }
    }
}

fn print_json_summary(summary: &ConversionSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": summary.input.display().to_string(),
        "output": summary.output.display().to_string(),
        "reference_files_opened": summary.reference_files_opened,
        "stats": summary.stats,
        "rejected": summary.stats.rejected(),
        "finished_at": chrono::Utc::now().to_rfc3339(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &ConversionSummary) {
    let stats = &summary.stats;
    println!(
        "total\tresolved\tmismatched\tout_of_bounds\tbad_position\tinvalid_allele\tmissing_reference\treference_open_error\tfetch_error\tmalformed"
    );
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        stats.total,
        stats.resolved,
        stats.mismatched,
        stats.out_of_bounds,
        stats.bad_position,
        stats.invalid_allele,
        stats.missing_reference,
        stats.reference_open_error,
        stats.fetch_error,
        stats.malformed,
    );
}
