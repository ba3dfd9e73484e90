use crate::core::audit;
use crate::core::calculator::summary::export_week_text;
use crate::core::calculator::week::{WeekOrder, buckets, start_of_week};
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::clipboard::copy_to_clipboard;
use crate::export::csv::to_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::to_json;
use crate::export::model::to_export_rows;
use crate::models::date_range::DateRange;
use crate::ui::messages::success;
use chrono::{NaiveDate, Weekday};
use std::fs;
use std::path::PathBuf;

/// What to export and where to send it.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Any day of the week to export; ignored when `range` is set.
    pub week_of: NaiveDate,
    pub range: Option<DateRange>,
    pub file: Option<PathBuf>,
    pub clipboard: bool,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Build the export payload without any side effect.
    ///
    /// Text exports render one weekly block per week (blocks separated by an
    /// empty line); CSV and JSON list one row per stored day.
    pub fn render<S: DayStore>(
        store: &mut S,
        opts: &ExportOptions,
        first_day: Weekday,
    ) -> AppResult<String> {
        let range = match opts.range {
            Some(r) => r,
            None => DateRange::week(start_of_week(opts.week_of, first_day)?),
        };

        match opts.format {
            ExportFormat::Text if opts.range.is_none() => {
                let records = store.fetch_records(Some(range))?;
                Ok(export_week_text(range.first, &records))
            }
            ExportFormat::Text => {
                // Every block spans a whole week, even where the range starts
                // or ends mid-week.
                let whole_weeks = DateRange::new(
                    start_of_week(range.first, first_day)?,
                    DateRange::week(start_of_week(range.last, first_day)?).last,
                );
                let records = store.fetch_records(Some(whole_weeks))?;
                let blocks: Vec<String> = buckets(&records, first_day, WeekOrder::Ascending)?
                    .iter()
                    .map(|b| export_week_text(b.week_start, &b.records))
                    .collect();
                Ok(blocks.join("\n\n"))
            }
            ExportFormat::Csv => to_csv(&to_export_rows(&store.fetch_records(Some(range))?)),
            ExportFormat::Json => to_json(&to_export_rows(&store.fetch_records(Some(range))?)),
        }
    }

    /// Render, then deliver to the file and/or clipboard, or stdout when
    /// neither is requested.
    pub fn export<S: DayStore>(
        store: &mut S,
        opts: &ExportOptions,
        first_day: Weekday,
    ) -> AppResult<String> {
        let payload = Self::render(store, opts, first_day)?;

        if let Some(path) = &opts.file {
            ensure_writable(path, opts.force)?;
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &payload)?;
            success(format!(
                "{} export completed: {}",
                opts.format.as_str(),
                path.display()
            ));
        }

        if opts.clipboard {
            copy_to_clipboard(&payload)?;
            success("Copied to clipboard.");
        }

        if opts.file.is_none() && !opts.clipboard {
            println!("{}", payload);
        }

        let target = opts
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| if opts.clipboard { "clipboard" } else { "stdout" }.to_string());
        audit(
            store,
            "export",
            &target,
            &format!("Exported {}", opts.format.as_str()),
        );

        Ok(payload)
    }
}
