use std::path::PathBuf;
use std::time::{Duration, Instant};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tokio::sync::mpsc;

use mhw_sharpness_core::WeaponCategory;
use mhw_sharpness_reconcile::{
    MAPPING_FILE, MERGED_FILE, REPORT_FILE, ReconcileOptions, RunReport, reconcile, write_mapping,
    write_merged,
};
use mhw_sharpness_scraper::{Harvest, HttpFetcher, Settings, SourceRole, harvest_both};

use crate::error::CliError;
use crate::events::run_with_events;
use crate::spinner::HarvestSpinners;

/// Harvest both sources, reconcile and write the three output files.
pub(crate) fn run_harvest(
    categories: Option<Vec<WeaponCategory>>,
    out_dir: Option<PathBuf>,
    timeout: Option<u64>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut settings = Settings::load()?;
    if let Some(secs) = timeout {
        settings = settings.with_timeout_secs(secs);
    }
    if let Some(dir) = out_dir {
        settings = settings.with_output_dir(dir);
    }
    let categories = categories.unwrap_or_else(|| WeaponCategory::all().to_vec());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to start runtime: {e}")))?;

    let started = Instant::now();
    let (mut reference, mut alternate) =
        rt.block_on(harvest(&settings, &categories, quiet))?;
    // Summed over concurrent tasks, so these can exceed wall-clock time.
    let network = reference.timings.network + alternate.timings.network;
    let extraction = reference.timings.processing + alternate.timings.processing;

    for side in [&reference, &alternate] {
        log::info!(
            "{} {}: {} weapons in {} categories",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            side.source.if_supports_color(Stdout, |t| t.bold()),
            side.weapon_count(),
            side.weapons.len(),
        );
    }

    let reconcile_started = Instant::now();
    let result = reconcile(
        &mut reference.weapons,
        &mut alternate.weapons,
        &ReconcileOptions {
            categories: categories.clone(),
        },
    );
    let reconciling = reconcile_started.elapsed();

    let out = &settings.output_dir;
    write_mapping(&out.join(MAPPING_FILE), &result.mapping)?;
    write_merged(&out.join(MERGED_FILE), &result.merged)?;
    let total = started.elapsed();

    let mut report = RunReport::new(&result);
    report.add_count(reference.source, reference.weapon_count());
    report.add_count(alternate.source, alternate.weapon_count());
    report.add_timing("Network", network);
    report.add_timing("Extraction", extraction);
    report.add_timing("Reconcile", reconciling);
    report.add_timing("Total", total);
    report.write_to_file(&out.join(REPORT_FILE))?;

    print_summary(&result.stats, out);
    log::info!("");
    log::info!(
        "Timings: network {}, extraction {}, reconcile {}, total {}",
        secs(network),
        secs(extraction),
        secs(reconciling),
        secs(total),
    );
    Ok(())
}

async fn harvest(
    settings: &Settings,
    categories: &[WeaponCategory],
    quiet: bool,
) -> Result<(Harvest, Harvest), CliError> {
    let fetcher = HttpFetcher::new(settings.timeout())?;
    let reference = SourceRole::Reference.source(settings);
    let alternate = SourceRole::Alternate.source(settings);

    let mut spinners = HarvestSpinners::new(categories.len(), quiet);
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let task = async move {
        let result = harvest_both(
            &fetcher,
            reference.as_ref(),
            alternate.as_ref(),
            categories,
            &event_tx,
        )
        .await;
        drop(event_tx);
        result
    };
    let result = run_with_events(task, event_rx, |e| spinners.handle(e)).await;
    spinners.clear_all();

    if let Err(e) = &result {
        log::warn!(
            "{} Harvest failed",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        );
        log::debug!("{e:?}");
    }
    Ok(result?)
}

fn print_summary(stats: &mhw_sharpness_reconcile::ReconcileStats, out: &std::path::Path) {
    log::info!(
        "{} Reconciled {} categories",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.categories,
    );
    log::info!("  Mapped:     {}", stats.mapped);
    if stats.ambiguous > 0 {
        log::info!(
            "  Ambiguous:  {}",
            stats.ambiguous.if_supports_color(Stdout, |t| t.yellow())
        );
    }
    if stats.unmatched > 0 {
        log::warn!(
            "  Unmatched:  {}",
            stats.unmatched.if_supports_color(Stdout, |t| t.yellow())
        );
    }
    if stats.duplicates > 0 {
        log::warn!(
            "  Duplicates: {}",
            stats.duplicates.if_supports_color(Stdout, |t| t.yellow())
        );
    }
    log::info!("  Merged:     {}", stats.merged);
    log::info!(
        "  Output:     {}",
        out.display().if_supports_color(Stdout, |t| t.cyan())
    );
}

fn secs(d: Duration) -> String {
    format!("{:.2}s", d.as_secs_f64())
}
