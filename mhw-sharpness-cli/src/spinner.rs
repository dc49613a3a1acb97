//! Per-source spinners for the harvest phase.
//!
//! One spinner line per source, updated from harvest events with the
//! number of categories finished so far.

use std::collections::HashMap;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use mhw_sharpness_scraper::HarvestEvent;

struct SourceLine {
    bar: ProgressBar,
    done: usize,
    weapons: usize,
}

pub(crate) struct HarvestSpinners {
    mp: MultiProgress,
    style: ProgressStyle,
    lines: HashMap<&'static str, SourceLine>,
    total: usize,
}

impl HarvestSpinners {
    /// Spinners for a harvest of `total` categories per source.
    ///
    /// When `quiet` is true, all spinners are hidden.
    pub(crate) fn new(total: usize, quiet: bool) -> Self {
        let mp = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");

        Self {
            mp,
            style,
            lines: HashMap::new(),
            total,
        }
    }

    fn line(&mut self, source: &'static str) -> &mut SourceLine {
        let Self {
            mp, style, lines, ..
        } = self;
        lines.entry(source).or_insert_with(|| {
            let bar = mp.add(ProgressBar::new_spinner());
            bar.set_style(style.clone());
            bar.enable_steady_tick(std::time::Duration::from_millis(100));
            SourceLine {
                bar,
                done: 0,
                weapons: 0,
            }
        })
    }

    pub(crate) fn handle(&mut self, event: HarvestEvent) {
        let total = self.total;
        match event {
            HarvestEvent::CategoryStarted { source, category } => {
                let line = self.line(source);
                line.bar.set_message(format!(
                    "{} [{}/{}] fetching {}",
                    source, line.done, total, category
                ));
            }
            HarvestEvent::CategoryCompleted {
                source,
                category,
                weapons,
            } => {
                let line = self.line(source);
                line.done += 1;
                line.weapons += weapons;
                line.bar.set_message(format!(
                    "{} [{}/{}] {} weapons ({} done)",
                    source, line.done, total, line.weapons, category
                ));
            }
        }
    }

    /// Stop ticking and clear every line.
    pub(crate) fn clear_all(&mut self) {
        for line in self.lines.values() {
            line.bar.disable_steady_tick();
            line.bar.finish_and_clear();
        }
        self.lines.clear();
    }
}
