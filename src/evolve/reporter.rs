//! Per-generation CSV logging and population snapshots.
//!
//! A failing write is reported once through the log facade and then
//! suppressed for the rest of the run; file output never terminates the
//! search.
use crate::action::Action;
use crate::config::EvolveConfig;
use crate::genome::Genome;
use crate::population::{DiversityStats, MinAvgMax, Pool};
use itertools::Itertools;
use log::warn;
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_HEADER: &str = "Iteration,FitAvg,FitMax,FitMin,TimeAvg,TimeMax,TimeMin,CovAvg,CovMax,CovMin,AngleAvg,AngleMax,AngleMin,ObjCountAvg,ObjCountMax,ObjCountMin,PathLenAvg,PathLenMax,PathLenMin,AcLenAvg,AcLenMax,AcLenMin,ZeroAcPercent,DGens,BestTime,BestCov,BestAngle,BestLen,BestPathLen,BestDiv,BestObj,BestCross,BestTraveled,BestPathLen,DivMean,DivStd,DivMax,DivMin,PopFilled,PopSize,CrossFailed,MutaCount,Duration";

/// One generation's worth of pool statistics, assembled by the driver.
#[derive(Clone, Debug, Default)]
pub struct GenerationStats {
    pub iteration: usize,
    pub fitness: MinAvgMax,
    pub time: MinAvgMax,
    pub coverage: MinAvgMax,
    pub rotation: MinAvgMax,
    pub obstacles: MinAvgMax,
    pub path_len: MinAvgMax,
    pub action_len: MinAvgMax,
    pub zero_action_percent: f32,
    pub dead_gens: usize,
    pub diversity: DiversityStats,
    pub pop_filled: usize,
    pub pop_size: usize,
    pub cross_failed: u32,
    pub muta_count: u32,
    pub duration_ms: u128,
}

pub struct Reporter {
    log_dir: PathBuf,
    log_name: String,
    take_snapshot_every: usize,
    header_written: bool,
    io_failed: bool,
}

impl Reporter {
    pub fn new(config: &EvolveConfig) -> Self {
        Self {
            log_dir: config.log_dir.clone(),
            log_name: config.log_name.clone(),
            take_snapshot_every: config.take_snapshot_every,
            header_written: false,
            io_failed: false,
        }
    }

    fn enabled(&self) -> bool {
        !self.log_dir.as_os_str().is_empty() && !self.log_name.is_empty()
    }

    /// Redirect all further output into a `retrain_run` sibling directory,
    /// keeping the previous run's files intact.
    pub fn redirect_retrain(&mut self) {
        self.log_dir.push("retrain_run");
        self.header_written = false;
        self.io_failed = false;
    }

    /// Append one CSV row, writing the header first on the initial call.
    pub fn log_generation(&mut self, stats: &GenerationStats, best: Option<&Genome>) {
        if !self.enabled() || self.io_failed {
            return;
        }
        let mut row = String::new();
        push_field(&mut row, stats.iteration);
        push_triple_avg_max_min(&mut row, stats.fitness);
        push_triple_avg_max_min(&mut row, stats.time);
        push_triple_avg_max_min(&mut row, stats.coverage);
        push_triple_avg_max_min(&mut row, stats.rotation);
        push_triple_avg_max_min(&mut row, stats.obstacles);
        push_triple_avg_max_min(&mut row, stats.path_len);
        push_triple_avg_max_min(&mut row, stats.action_len);
        push_field(&mut row, stats.zero_action_percent);
        push_field(&mut row, stats.dead_gens);
        match best {
            Some(best) => {
                push_field(&mut row, best.final_time_s);
                push_field(&mut row, best.coverage_ratio);
                push_field(&mut row, best.rotation_time_s);
                push_field(&mut row, best.len());
                push_field(&mut row, best.path_length_cm);
                push_field(&mut row, best.diversity_factor);
                push_field(&mut row, best.obstacle_hits);
                push_field(&mut row, best.crossings);
                push_field(&mut row, best.traveled_cm);
                // the duplicated BestPathLen column is historical and kept
                // for downstream compatibility
                push_field(&mut row, best.path_length_cm);
            }
            None => {
                for _ in 0..10 {
                    push_field(&mut row, 0.0f32);
                }
            }
        }
        push_field(&mut row, stats.diversity.mean);
        push_field(&mut row, stats.diversity.std);
        push_field(&mut row, stats.diversity.max);
        push_field(&mut row, stats.diversity.min);
        push_field(&mut row, stats.pop_filled);
        push_field(&mut row, stats.pop_size);
        push_field(&mut row, stats.cross_failed);
        push_field(&mut row, stats.muta_count);
        push_field(&mut row, stats.duration_ms);

        if let Err(error) = self.append_row(&row) {
            warn!("generation log write failed, disabling: {}", error);
            self.io_failed = true;
        }
    }

    fn append_row(&mut self, row: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.log_dir)?;
        let path = self.log_dir.join(&self.log_name);
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        if !self.header_written {
            writeln!(file, "{}", LOG_HEADER)?;
            self.header_written = true;
        }
        writeln!(file, "{}", row)
    }

    /// Write `<iter>_pool.actions` and `<iter>_pool.performance` when the
    /// snapshot interval is due.
    pub fn maybe_snapshot(&mut self, iteration: usize, pool: &Pool) {
        if !self.enabled()
            || self.io_failed
            || self.take_snapshot_every == 0
            || iteration % self.take_snapshot_every != 0
        {
            return;
        }
        if let Err(error) = self.write_snapshot(iteration, pool) {
            warn!("snapshot write failed, disabling: {}", error);
            self.io_failed = true;
        }
    }

    fn write_snapshot(&self, iteration: usize, pool: &Pool) -> std::io::Result<()> {
        fs::create_dir_all(&self.log_dir)?;
        let actions_path = self.log_dir.join(format!("{}_pool.actions", iteration));
        write_pool_actions(&actions_path, pool)?;

        let performance_path = self.log_dir.join(format!("{}_pool.performance", iteration));
        let mut performance = String::from("fitness,traveledDist,cross,fTime,fCoverage,#actions\n");
        for genome in &pool.genomes {
            performance.push_str(&format!(
                "{},{},{},{},{},{}\n",
                genome.fitness.unwrap_or(0.0),
                genome.traveled_cm,
                genome.crossings,
                genome.final_time_s,
                genome.coverage_ratio,
                genome.len()
            ));
        }
        fs::write(performance_path, performance)
    }
}

fn push_field<T: std::fmt::Display>(row: &mut String, value: T) {
    if !row.is_empty() {
        row.push(',');
    }
    row.push_str(&value.to_string());
}

// the historical column order within each triple is avg, max, min
fn push_triple_avg_max_min(row: &mut String, triple: MinAvgMax) {
    push_field(row, triple.avg);
    push_field(row, triple.max);
    push_field(row, triple.min);
}

/// Stable one-line-per-genome action serialization, parseable for restore.
pub fn write_pool_actions(path: &Path, pool: &Pool) -> std::io::Result<()> {
    let mut out = String::new();
    for genome in &pool.genomes {
        out.push_str(&format_actions(&genome.actions));
        out.push('\n');
    }
    fs::write(path, out)
}

pub fn format_actions(actions: &[Action]) -> String {
    actions.iter().map(|a| a.to_string()).join("|")
}

pub fn parse_actions(line: &str) -> Option<Vec<Action>> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Vec::new());
    }
    line.split('|').map(parse_action).collect()
}

fn parse_action(token: &str) -> Option<Action> {
    let mut parts = token.split(':');
    let kind = parts.next()?;
    let first: f32 = parts.next()?.parse().ok()?;
    let action = match kind {
        "S" => Action::Straight { distance_cm: first },
        "F" => Action::CStraight { distance_cm: first },
        "R" => Action::Rotate { angle_deg: first },
        "C" | "V" => {
            let radius_cm: f32 = parts.next()?.parse().ok()?;
            if kind == "C" {
                Action::Curve {
                    angle_deg: first,
                    radius_cm,
                }
            } else {
                Action::CCurve {
                    angle_deg: first,
                    radius_cm,
                }
            }
        }
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(action)
}

/// Read a `.actions` snapshot back into action sequences. Unparseable
/// lines are skipped with a warning.
pub fn read_pool_actions(path: &Path) -> std::io::Result<Vec<Vec<Action>>> {
    let content = fs::read_to_string(path)?;
    let mut sequences = Vec::new();
    for (number, line) in content.lines().enumerate() {
        match parse_actions(line) {
            Some(actions) => sequences.push(actions),
            None => warn!("skipping unparseable snapshot line {}", number + 1),
        }
    }
    Ok(sequences)
}
