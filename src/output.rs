//! Output writing: one directory per run, one sorted list file per bucket,
//! the statistics report, two case-study TSVs and the machine-readable run
//! summary.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::options::FilterOptions;
use crate::report::{Bucket, CaseStudy, FilterReport, RunStats};

/// Default output directory next to the input file, stamped with the run
/// time so successive runs never clobber each other.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "corpus".to_string());
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stamp = Local::now().format("%Y%m%d_%H%M");
    parent.join(format!("resultats_filtre_{stem}_{stamp}"))
}

/// Write a newline-delimited list, sorted. Every list file of a run is
/// sorted on write so diffs between runs stay stable.
async fn write_sorted_list(path: &Path, items: &[String]) -> Result<()> {
    let mut sorted: Vec<&str> = items.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let file = File::create(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for item in sorted {
        writer.write_all(item.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(())
}

/// Write a case-study TSV, one `token TAB phrase` row per entry, in
/// encounter order.
async fn write_case_studies(path: &Path, studies: &[CaseStudy]) -> Result<()> {
    let file = File::create(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for study in studies {
        writer
            .write_all(format!("{}\t{}\n", study.token, study.phrase).as_bytes())
            .await?;
    }
    writer.flush().await?;
    Ok(())
}

/// Write every artifact of a finished run into `dir`, all file names
/// prefixed with the input stem.
pub async fn write_report(
    dir: &Path,
    stem: &str,
    options: &FilterOptions,
    report: &FilterReport,
    run_stats: &RunStats,
) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let named = |suffix: &str| dir.join(format!("{stem}_{suffix}"));

    let mut statistics = options.selected_lines(stem);
    statistics.push("---------".to_string());
    statistics.extend(report.statistics_lines());
    write_sorted_list(&named("estadistiques_filtre.txt"), &statistics).await?;

    write_sorted_list(&named("frases_seleccionades.txt"), &report.accepted).await?;
    write_sorted_list(
        &named("frases_seleccionades_originals.txt"),
        &report.accepted_originals,
    )
    .await?;
    write_sorted_list(
        &named("frases_seleccionades_repetides.txt"),
        &report.duplicates,
    )
    .await?;

    for bucket in Bucket::ALL {
        write_sorted_list(&named(bucket.file_name()), report.bucket(bucket)).await?;
    }

    write_case_studies(&named("estudi_cas_filtre.tsv"), &report.exclusion_case_studies).await?;
    write_case_studies(
        &named("estudi_cas_ortografia.tsv"),
        &report.spelling_case_studies,
    )
    .await?;

    let json = serde_json::to_string_pretty(run_stats).context("failed to serialize run stats")?;
    fs::write(named("run_stats.json"), json)
        .await
        .context("failed to write run stats")?;

    info!("Wrote filter results to {}", dir.display());
    Ok(())
}
