//! Plain-text report layout.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::site::CallSiteKey;
use crate::stats::CallSiteStats;

/// Report layout options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Add an average self time column after the maximum.
    pub show_average: bool,
    /// Function names are padded up to this many characters. Longer names
    /// are written in full.
    pub max_function_width: usize,
    /// Decimals for times, which are given in seconds.
    pub precision: usize,
    /// Drop the directory prefix shared by every file name.
    pub strip_common_file_prefix: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_average: false,
            max_function_width: 30,
            precision: 4,
            strip_common_file_prefix: false,
        }
    }
}

/// One formatted report line, before alignment.
struct Row<'a> {
    count: String,
    acc: String,
    min: String,
    max: String,
    avg: String,
    function: &'a str,
    file: &'a str,
    line: u32,
}

impl<'a> Row<'a> {
    fn new(key: &'a CallSiteKey, stats: &CallSiteStats, precision: usize) -> Self {
        let secs = |value: f64| format!("{value:.precision$}");
        Self {
            count: stats.count().to_string(),
            acc: secs(stats.acc_secs()),
            min: secs(stats.min_secs()),
            max: secs(stats.max_secs()),
            avg: secs(stats.avg_secs()),
            function: key.function.as_ref(),
            file: key.file.as_ref(),
            line: key.line,
        }
    }
}

/// Column widths, taken from the widest value of each column.
#[derive(Default)]
struct Widths {
    count: usize,
    acc: usize,
    min: usize,
    max: usize,
    avg: usize,
    function: usize,
}

impl Widths {
    fn fit(&mut self, row: &Row<'_>) {
        self.count = self.count.max(row.count.len());
        self.acc = self.acc.max(row.acc.len());
        self.min = self.min.max(row.min.len());
        self.max = self.max.max(row.max.len());
        self.avg = self.avg.max(row.avg.len());
        self.function = self.function.max(row.function.chars().count());
    }
}

/// Write one line per entry, in iteration order.
pub(crate) fn write_report<'a, W, I>(
    sink: &mut W,
    entries: I,
    config: &ReportConfig,
) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a (CallSiteKey, CallSiteStats)>,
{
    let rows: Vec<Row<'a>> = entries
        .into_iter()
        .map(|(key, stats)| Row::new(key, stats, config.precision))
        .collect();
    if rows.is_empty() {
        return Ok(());
    }

    let mut widths = Widths::default();
    for row in &rows {
        widths.fit(row);
    }
    widths.function = widths.function.min(config.max_function_width);

    let prefix_len = if config.strip_common_file_prefix {
        common_dir_prefix_len(rows.iter().map(|row| row.file))
    } else {
        0
    };

    for row in &rows {
        write!(
            sink,
            "{:>cw$} {:>aw$} {:>nw$} {:>xw$}",
            row.count,
            row.acc,
            row.min,
            row.max,
            cw = widths.count,
            aw = widths.acc,
            nw = widths.min,
            xw = widths.max,
        )?;
        if config.show_average {
            write!(sink, " {:>vw$}", row.avg, vw = widths.avg)?;
        }
        writeln!(
            sink,
            "  {:<fw$}  {}:{}",
            row.function,
            &row.file[prefix_len..],
            row.line,
            fw = widths.function,
        )?;
    }
    sink.flush()
}

/// Length of the leading directory path shared by all `files`.
fn common_dir_prefix_len<'a>(mut files: impl Iterator<Item = &'a str>) -> usize {
    let Some(first) = files.next() else {
        return 0;
    };
    let mut len = first.len();
    for file in files {
        len = first
            .bytes()
            .zip(file.bytes())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count();
    }
    first.as_bytes()[..len]
        .iter()
        .rposition(|&b| b == b'/' || b == b'\\')
        .map_or(0, |sep| sep + 1)
}
