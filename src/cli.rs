//! CLI definition and the report pipeline.
//!
//! With no flags the run reads its settings from the environment, fetches the
//! report over IMAP and mails the result over SMTP. Every pipeline outcome
//! exits 0; only an unusable configuration ends the process with an error code.

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

use crate::adapters::env_config_adapter::EnvConfigAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_file_adapter::{HtmlFileSink, HtmlFileSource};
use crate::adapters::html_report_adapter::HtmlReportAdapter;
use crate::adapters::imap_adapter::ImapReportSource;
use crate::adapters::smtp_adapter::SmtpReportSink;
use crate::domain::error::ReportError;
use crate::domain::filter::filter_records;
use crate::domain::mail_config::MailConfig;
use crate::domain::record::StockRecord;
use crate::domain::reference_list::load_reference_list;
use crate::domain::table::extract_table;
use crate::ports::report_port::ReportPort;
use crate::ports::report_sink_port::ReportSinkPort;
use crate::ports::report_source_port::ReportSourcePort;

pub const REPORT_SUBJECT: &str = "Filtrelenmiş Hisse Raporu";

#[derive(Parser, Debug)]
#[command(
    name = "katilim-report",
    about = "Filter the daily technical analysis report by the participation index list"
)]
pub struct Cli {
    /// INI file with [mail] and [report] sections, used instead of the environment
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Reference list of tickers, one per line
    #[arg(short, long)]
    pub list: Option<PathBuf>,
    /// Read the report HTML from this file instead of the mailbox
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Write the rendered report to this file instead of mailing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NoReferenceList,
    NoReport,
    NoTable,
    NoMatches,
    RenderFailed,
    SendFailed,
    Sent { rows: usize },
}

pub fn run(cli: Cli) -> ExitCode {
    let mail_config = match load_mail_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return (&e).into();
        }
    };

    let reference_path = cli
        .list
        .unwrap_or_else(|| mail_config.reference_list.clone());

    let source: Box<dyn ReportSourcePort> = match cli.input {
        Some(path) => {
            info!(path = %path.display(), "reading report from file");
            Box::new(HtmlFileSource::new(path))
        }
        None => Box::new(ImapReportSource::from_config(&mail_config)),
    };
    let sink: Box<dyn ReportSinkPort> = match cli.output {
        Some(path) => Box::new(HtmlFileSink::new(path)),
        None => Box::new(SmtpReportSink::from_config(&mail_config)),
    };

    let outcome = run_report_pipeline(
        &reference_path,
        source.as_ref(),
        &HtmlReportAdapter::new(),
        sink.as_ref(),
        Local::now().date_naive(),
    );
    debug!(?outcome, "run finished");
    ExitCode::SUCCESS
}

pub fn load_mail_config(path: Option<&Path>) -> Result<MailConfig, ReportError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            let adapter =
                FileConfigAdapter::from_file(path).map_err(|e| ReportError::ConfigParse {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            MailConfig::from_config(&adapter)
        }
        None => MailConfig::from_config(&EnvConfigAdapter::from_env()),
    }
}

pub fn run_report_pipeline(
    reference_path: &Path,
    source: &dyn ReportSourcePort,
    renderer: &dyn ReportPort,
    sink: &dyn ReportSinkPort,
    today: NaiveDate,
) -> RunOutcome {
    // Stage 1: Reference list
    let reference = load_reference_list(reference_path);
    if reference.is_empty() {
        warn!(path = %reference_path.display(), "reference list is empty, nothing to do");
        return RunOutcome::NoReferenceList;
    }
    info!(
        total = reference.len(),
        first = %reference.preview(10),
        "loaded reference list"
    );

    // Stage 2: Fetch today's report
    let html = match source.fetch_report(today) {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "failed to fetch report");
            None
        }
    };

    // Stage 3: Extract and filter
    let Some(table) = extract_table(html.as_deref()) else {
        return if html.is_none() {
            RunOutcome::NoReport
        } else {
            RunOutcome::NoTable
        };
    };
    let filtered = filter_records(table.records(), &reference);

    // Stages 4-5: Render and send
    deliver_report(renderer, sink, &filtered, today)
}

/// Render and send `records`; an empty set sends nothing.
pub fn deliver_report(
    renderer: &dyn ReportPort,
    sink: &dyn ReportSinkPort,
    records: &[StockRecord],
    today: NaiveDate,
) -> RunOutcome {
    if records.is_empty() {
        info!("no matching rows, report not sent");
        return RunOutcome::NoMatches;
    }

    let document = match renderer.render_document(records, today) {
        Ok(d) => d,
        Err(e) => {
            error!(error = %e, "failed to render report");
            return RunOutcome::RenderFailed;
        }
    };

    match sink.send(REPORT_SUBJECT, &document) {
        Ok(()) => {
            info!(rows = records.len(), "filtered report sent");
            RunOutcome::Sent {
                rows: records.len(),
            }
        }
        Err(e) => {
            error!(error = %e, "failed to send report");
            RunOutcome::SendFailed
        }
    }
}
