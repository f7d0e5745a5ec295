//! Monthly bar chart
//!
//! A text rendition of the deposits/withdrawals bar chart. The chart lives
//! in a `ChartSlot`: every render discards the previous chart before
//! building the new one, so the slot never holds more than one chart and
//! rendering the same data twice gives the same result.

use crate::models::Money;
use crate::services::MonthlyData;

/// Default bar width in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

const DEPOSIT_BAR: char = '█';
const WITHDRAWAL_BAR: char = '▒';

/// A rendered bar chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    lines: Vec<String>,
}

impl BarChart {
    /// Build a chart from monthly data, scaling bars to `width`
    pub fn build(data: &MonthlyData, width: usize) -> Self {
        let width = width.max(1);
        let max = data
            .deposits
            .iter()
            .chain(&data.withdrawals)
            .map(|m| m.abs().sen())
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!(
            "{} Kas Masuk (Setoran)   {} Kas Keluar (Pengeluaran)",
            DEPOSIT_BAR, WITHDRAWAL_BAR
        )];

        for (label, deposits, withdrawals) in data.rows() {
            lines.push(String::new());
            lines.push(label.to_string());
            lines.push(bar_line(DEPOSIT_BAR, deposits, max, width));
            lines.push(bar_line(WITHDRAWAL_BAR, withdrawals, max, width));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

fn bar_line(fill: char, amount: Money, max: i64, width: usize) -> String {
    let value = amount.abs().sen();
    let len = if max == 0 {
        0
    } else {
        // Any non-zero amount gets at least one cell
        let scaled = (value as f64 / max as f64 * width as f64).round() as usize;
        if value > 0 {
            scaled.max(1)
        } else {
            0
        }
    };
    format!(
        "  {}{} {}",
        fill.to_string().repeat(len),
        " ".repeat(width - len.min(width)),
        amount
    )
}

/// Owner of the current chart
#[derive(Debug)]
pub struct ChartSlot {
    chart: Option<BarChart>,
    width: usize,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::with_width(DEFAULT_BAR_WIDTH)
    }

    pub fn with_width(width: usize) -> Self {
        Self { chart: None, width }
    }

    /// Replace the current chart with one built from `data`
    ///
    /// An empty breakdown leaves the slot empty.
    pub fn render(&mut self, data: &MonthlyData) -> Option<&BarChart> {
        self.clear();
        if !data.is_empty() {
            self.chart = Some(BarChart::build(data, self.width));
        }
        self.chart.as_ref()
    }

    pub fn current(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }

    /// Drop the current chart
    pub fn clear(&mut self) {
        self.chart = None;
    }
}

impl Default for ChartSlot {
    fn default() -> Self {
        Self::new()
    }
}
